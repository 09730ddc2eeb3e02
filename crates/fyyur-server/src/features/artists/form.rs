//! Artist form: schema and intake

use serde_json::json;

use crate::features::shared::forms::{FieldErrors, FieldKind, FieldSpec, FormFields, FormSchema};
use crate::models::{Artist, ArtistFields};

pub const ARTIST_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::required("city", "City", FieldKind::Text),
    FieldSpec::required("state", "State", FieldKind::Select),
    FieldSpec::optional("phone", "Phone", FieldKind::Tel),
    FieldSpec::optional("image_link", "Image Link", FieldKind::Url),
    FieldSpec::required("genres", "Genres", FieldKind::MultiSelect),
    FieldSpec::optional("facebook_link", "Facebook Link", FieldKind::Url),
    FieldSpec::optional("website", "Website", FieldKind::Url),
    FieldSpec::optional("seeking_venue", "Looking for Venues", FieldKind::YesNo),
    FieldSpec::optional("seeking_description", "Seeking Description", FieldKind::TextArea),
];

pub struct ArtistForm;

impl ArtistForm {
    pub fn schema() -> FormSchema {
        FormSchema::with_choices(ARTIST_FIELDS)
    }

    pub fn prefilled(artist: &Artist) -> FormSchema {
        Self::schema().with_values(json!({
            "id": artist.id,
            "name": artist.name,
            "city": artist.city,
            "state": artist.state,
            "phone": artist.phone,
            "image_link": artist.image_link,
            "genres": artist.genres,
            "facebook_link": artist.facebook_link,
            "website": artist.website,
            "seeking_venue": if artist.seeking_venue { "Yes" } else { "No" },
            "seeking_description": artist.seeking_description,
        }))
    }

    /// Validate submitted fields. `state` is read from the `state` field.
    pub fn validate(form: &FormFields) -> Result<ArtistFields, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = form.required_text("name", &mut errors);
        let city = form.required_text("city", &mut errors);
        let state = form.required_state("state", &mut errors);
        let genres = form.required_genres(&mut errors);
        let phone = form.optional_phone("phone", &mut errors);
        let website = form.optional_url("website", &mut errors);
        let image_link = form.optional_url("image_link", &mut errors);
        let facebook_link = form.optional_url("facebook_link", &mut errors);

        let seeking_venue = form.yes_no("seeking_venue");
        let seeking_description = if seeking_venue {
            form.get("seeking_description").map(str::to_string)
        } else {
            None
        };

        errors.into_result(ArtistFields {
            name,
            city,
            state,
            phone,
            website,
            image_link,
            facebook_link,
            genres,
            seeking_venue,
            seeking_description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&'static str, &'static str)]) -> FormFields {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_state_is_taken_from_state_field() {
        let fields = ArtistForm::validate(&form(&[
            ("name", "Matt Quevedo"),
            ("city", "New York"),
            ("state", "NY"),
            ("genres", "Jazz"),
        ]))
        .unwrap();
        assert_eq!(fields.city, "New York");
        assert_eq!(fields.state, "NY");
        assert!(!fields.seeking_venue);
    }

    #[test]
    fn test_legacy_genre_blob() {
        let fields = ArtistForm::validate(&form(&[
            ("name", "The Wild Sax Band"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("genres", "{Jazz,Classical}"),
            ("seeking_venue", "No"),
            ("seeking_description", "ignored"),
        ]))
        .unwrap();
        assert_eq!(fields.genres, vec!["Jazz", "Classical"]);
        assert_eq!(fields.seeking_description, None);
    }

    #[test]
    fn test_address_is_not_required() {
        let errors = ArtistForm::validate(&FormFields::default()).unwrap_err();
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["city", "genres", "name", "state"]);
    }

    #[test]
    fn test_bad_links() {
        let errors = ArtistForm::validate(&form(&[
            ("name", "Guns N Petals"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("genres", "Rock n Roll"),
            ("image_link", "images/petals.jpg"),
            ("facebook_link", "facebook.com/GunsNPetals"),
        ]))
        .unwrap_err();
        assert!(errors.get("image_link").is_some());
        assert!(errors.get("facebook_link").is_some());
        assert_eq!(errors.len(), 2);
    }
}
