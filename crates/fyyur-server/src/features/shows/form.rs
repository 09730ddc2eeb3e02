//! Show form: schema and intake

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::features::shared::datetime::parse_start_time;
use crate::features::shared::forms::{FieldErrors, FieldKind, FieldSpec, FormFields, FormSchema};
use crate::models::NewShow;

pub const SHOW_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("artist_id", "Artist ID", FieldKind::Integer),
    FieldSpec::required("venue_id", "Venue ID", FieldKind::Integer),
    FieldSpec::required("start_time", "Start Time", FieldKind::DateTime),
];

/// Format used to prefill `start_time`; accepted back by intake.
const START_TIME_INPUT: &str = "%Y-%m-%d %H:%M:%S";

pub struct ShowForm;

impl ShowForm {
    /// The empty form, with `start_time` defaulting to `now`
    pub fn schema(now: DateTime<Utc>) -> FormSchema {
        FormSchema::plain(SHOW_FIELDS).with_values(json!({
            "start_time": now.format(START_TIME_INPUT).to_string(),
        }))
    }

    pub fn validate(form: &FormFields) -> Result<NewShow, FieldErrors> {
        let mut errors = FieldErrors::new();

        let artist_id = required_id(form, "artist_id", &mut errors);
        let venue_id = required_id(form, "venue_id", &mut errors);
        let start_time = match form.get("start_time") {
            None => {
                errors.required("start_time");
                None
            },
            Some(raw) => {
                let parsed = parse_start_time(raw);
                if parsed.is_none() {
                    errors.add("start_time", "Not a valid datetime value.");
                }
                parsed
            },
        };

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => {
                Ok(NewShow {
                    artist_id,
                    venue_id,
                    start_time,
                })
            },
            _ => Err(errors),
        }
    }
}

fn required_id(form: &FormFields, key: &str, errors: &mut FieldErrors) -> Option<i64> {
    let Some(raw) = form.get(key) else {
        errors.required(key);
        return None;
    };
    match raw.parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.add(key, "Not a valid integer value.");
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn form(pairs: &[(&'static str, &'static str)]) -> FormFields {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_valid_submission() {
        let show = ShowForm::validate(&form(&[
            ("artist_id", "4"),
            ("venue_id", " 1 "),
            ("start_time", "2019-05-21 21:30:00"),
        ]))
        .unwrap();

        assert_eq!(show.artist_id, 4);
        assert_eq!(show.venue_id, 1);
        assert_eq!(show.start_time, Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap());
    }

    #[test]
    fn test_reports_every_bad_field() {
        let errors = ShowForm::validate(&form(&[("artist_id", "four"), ("start_time", "soon")]))
            .unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("artist_id").unwrap()[0], "Not a valid integer value.");
        assert_eq!(errors.get("venue_id").unwrap()[0], "This field is required.");
        assert_eq!(errors.get("start_time").unwrap()[0], "Not a valid datetime value.");
    }

    #[test]
    fn test_schema_defaults_start_time() {
        let now = Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap();
        let schema = ShowForm::schema(now);

        assert!(schema.genre_choices.is_none());
        assert_eq!(schema.values.unwrap()["start_time"], "2024-02-03 04:05:06");
        assert_eq!(
            schema.fields.iter().filter(|f| f.required).count(),
            SHOW_FIELDS.len()
        );
    }
}
