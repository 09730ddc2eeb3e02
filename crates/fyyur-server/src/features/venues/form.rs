//! Venue form: schema and intake

use serde_json::json;

use crate::features::shared::forms::{FieldErrors, FieldKind, FieldSpec, FormFields, FormSchema};
use crate::models::{Venue, VenueFields};

pub const VENUE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::required("city", "City", FieldKind::Text),
    FieldSpec::required("state", "State", FieldKind::Select),
    FieldSpec::required("address", "Address", FieldKind::Text),
    FieldSpec::optional("phone", "Phone", FieldKind::Tel),
    FieldSpec::optional("image_link", "Image Link", FieldKind::Url),
    FieldSpec::required("genres", "Genres", FieldKind::MultiSelect),
    FieldSpec::optional("facebook_link", "Facebook Link", FieldKind::Url),
    FieldSpec::optional("website", "Website", FieldKind::Url),
    FieldSpec::optional("seeking_talent", "Looking for Talent", FieldKind::YesNo),
    FieldSpec::optional("seeking_description", "Seeking Description", FieldKind::TextArea),
];

pub struct VenueForm;

impl VenueForm {
    pub fn schema() -> FormSchema {
        FormSchema::with_choices(VENUE_FIELDS)
    }

    /// The schema prefilled with a stored venue
    pub fn prefilled(venue: &Venue) -> FormSchema {
        Self::schema().with_values(json!({
            "id": venue.id,
            "name": venue.name,
            "city": venue.city,
            "state": venue.state,
            "address": venue.address,
            "phone": venue.phone,
            "image_link": venue.image_link,
            "genres": venue.genres,
            "facebook_link": venue.facebook_link,
            "website": venue.website,
            "seeking_talent": if venue.seeking_talent { "Yes" } else { "No" },
            "seeking_description": venue.seeking_description,
        }))
    }

    /// Validate submitted fields, reporting every invalid field at once.
    pub fn validate(form: &FormFields) -> Result<VenueFields, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = form.required_text("name", &mut errors);
        let city = form.required_text("city", &mut errors);
        let state = form.required_state("state", &mut errors);
        let address = form.required_text("address", &mut errors);
        let genres = form.required_genres(&mut errors);
        let phone = form.optional_phone("phone", &mut errors);
        let website = form.optional_url("website", &mut errors);
        let image_link = form.optional_url("image_link", &mut errors);
        let facebook_link = form.optional_url("facebook_link", &mut errors);

        let seeking_talent = form.yes_no("seeking_talent");
        let seeking_description = if seeking_talent {
            form.get("seeking_description").map(str::to_string)
        } else {
            None
        };

        errors.into_result(VenueFields {
            name,
            city,
            state,
            address,
            phone,
            website,
            image_link,
            facebook_link,
            genres,
            seeking_talent,
            seeking_description,
        })
    }
}
