//! Submitted form handling
//!
//! Handlers extract `Form<Vec<(String, String)>>` so repeated keys (a
//! multi-select `genres`) survive, wrap the pairs in [`FormFields`], and hand
//! them to an entity form (`VenueForm`, `ArtistForm`, `ShowForm`). Those
//! collect every problem into [`FieldErrors`] instead of stopping at the
//! first one.

use serde::Serialize;
use std::collections::BTreeMap;

use fyyur_common::{GENRES, STATES};

use super::validation::{
    validate_choice, validate_name, validate_phone, validate_url, MAX_NAME_LENGTH,
};

/// Raw submitted key/value pairs, in submission order
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl FormFields {
    /// First value for `key`, trimmed. Blank values count as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .find(|v| !v.is_empty())
    }

    /// Every non-blank value for `key`, trimmed, in submission order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// Submitted genres.
    ///
    /// Repeated `genres` fields are taken verbatim. A single value is read as
    /// the legacy blob (`{Rock,Jazz}` or `Rock,Jazz`) and split.
    pub fn genres(&self) -> Vec<String> {
        match self.get_all("genres").as_slice() {
            [] => Vec::new(),
            [single] => split_genre_blob(single),
            many => many.iter().map(|g| g.to_string()).collect(),
        }
    }

    /// Validate a required text field, recording an error when it is missing or too long.
    pub fn required_text(&self, key: &str, errors: &mut FieldErrors) -> String {
        let value = self.get(key).unwrap_or_default();
        if let Err(e) = validate_name(value, MAX_NAME_LENGTH) {
            errors.add(key, e);
        }
        value.to_string()
    }

    /// Validate a required `state` field against the US state codes.
    pub fn required_state(&self, key: &str, errors: &mut FieldErrors) -> String {
        let value = self.required_text(key, errors);
        if !value.is_empty() {
            if let Err(e) = validate_choice(&value, STATES) {
                errors.add(key, e);
            }
        }
        value
    }

    /// Validate the required genre list: at least one, each an offered choice.
    pub fn required_genres(&self, errors: &mut FieldErrors) -> Vec<String> {
        let genres = self.genres();
        if genres.is_empty() {
            errors.add("genres", REQUIRED);
        }
        for genre in &genres {
            if let Err(e) = validate_choice(genre, GENRES) {
                errors.add("genres", e);
            }
        }
        genres
    }

    pub fn optional_url(&self, key: &str, errors: &mut FieldErrors) -> Option<String> {
        let value = self.get(key)?;
        if let Err(e) = validate_url(value) {
            errors.add(key, e);
        }
        Some(value.to_string())
    }

    pub fn optional_phone(&self, key: &str, errors: &mut FieldErrors) -> Option<String> {
        let value = self.get(key)?;
        if let Err(e) = validate_phone(value) {
            errors.add(key, e);
        }
        Some(value.to_string())
    }

    /// A `"Yes"`/`"No"` select. Only `"Yes"` is true.
    pub fn yes_no(&self, key: &str) -> bool {
        parse_yes_no(self.get(key))
    }
}

const REQUIRED: &str = "This field is required.";

/// Validation messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl ToString) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    /// Record that a required field was left blank.
    pub fn required(&mut self, field: &str) {
        self.add(field, REQUIRED);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.0).unwrap_or(serde_json::Value::Null)
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// Split a legacy genre blob such as `{Rock,Jazz}` into its parts.
///
/// One pair of enclosing braces is stripped, then the rest is split on commas.
/// Blank parts are dropped.
pub fn split_genre_blob(blob: &str) -> Vec<String> {
    let trimmed = blob.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(trimmed);

    inner
        .split(',')
        .map(|g| g.trim().trim_matches('"').trim())
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// `true` only for `"Yes"`.
pub fn parse_yes_no(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("Yes"))
}

// ============================================================================
// Form schemas
// ============================================================================

/// Input widget a field is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Select,
    MultiSelect,
    Tel,
    Url,
    YesNo,
    TextArea,
    Integer,
    DateTime,
}

/// One field of a form schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }
}

/// What a page needs to render a create or edit form
#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    pub fields: &'static [FieldSpec],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_choices: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_choices: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<serde_json::Value>,
}

impl FormSchema {
    /// A schema offering the genre and state choice lists
    pub fn with_choices(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            genre_choices: Some(GENRES),
            state_choices: Some(STATES),
            values: None,
        }
    }

    pub fn plain(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            genre_choices: None,
            state_choices: None,
            values: None,
        }
    }

    /// Prefill the form
    pub fn with_values(mut self, values: serde_json::Value) -> Self {
        self.values = Some(values);
        self
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&'static str, &'static str)]) -> FormFields {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_split_genre_blob() {
        assert_eq!(split_genre_blob("{Rock,Jazz}"), vec!["Rock", "Jazz"]);
        assert_eq!(split_genre_blob("Rock,Jazz"), vec!["Rock", "Jazz"]);
        assert_eq!(split_genre_blob("{Jazz}"), vec!["Jazz"]);
        assert_eq!(split_genre_blob("{\"Rock n Roll\", Jazz}"), vec!["Rock n Roll", "Jazz"]);
        assert!(split_genre_blob("{}").is_empty());
        assert!(split_genre_blob("").is_empty());
    }

    #[test]
    fn test_repeated_genres_are_verbatim() {
        let fields = form(&[("genres", "Jazz"), ("genres", "R&B"), ("genres", "Jazz")]);
        assert_eq!(fields.genres(), vec!["Jazz", "R&B", "Jazz"]);
    }

    #[test]
    fn test_single_genre_value_is_split() {
        let fields = form(&[("genres", "{Rock n Roll,Folk}")]);
        assert_eq!(fields.genres(), vec!["Rock n Roll", "Folk"]);
    }

    #[test]
    fn test_get_skips_blank_values() {
        let fields = form(&[("phone", "   "), ("name", " The Dueling Pianos Bar ")]);
        assert_eq!(fields.get("phone"), None);
        assert_eq!(fields.get("name"), Some("The Dueling Pianos Bar"));
        assert_eq!(fields.get("missing"), None);
    }

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no(Some("Yes")));
        assert!(!parse_yes_no(Some("No")));
        assert!(!parse_yes_no(Some("yes please")));
        assert!(!parse_yes_no(None));
    }

    #[test]
    fn test_required_state_reports_each_problem_once() {
        let mut errors = FieldErrors::new();
        form(&[]).required_state("state", &mut errors);
        assert_eq!(errors.get("state").map(<[String]>::len), Some(1));

        let mut errors = FieldErrors::new();
        let state = form(&[("state", "XX")]).required_state("state", &mut errors);
        assert_eq!(state, "XX");
        assert_eq!(errors.get("state").unwrap(), ["'XX' is not a valid choice"]);
    }

    #[test]
    fn test_required_genres() {
        let mut errors = FieldErrors::new();
        assert!(form(&[]).required_genres(&mut errors).is_empty());
        assert_eq!(errors.get("genres").unwrap(), ["This field is required."]);

        let mut errors = FieldErrors::new();
        form(&[("genres", "Jazz"), ("genres", "Polka")]).required_genres(&mut errors);
        assert_eq!(errors.get("genres").unwrap(), ["'Polka' is not a valid choice"]);
    }

    #[test]
    fn test_field_errors_serialize_as_map() {
        let mut errors = FieldErrors::new();
        errors.required("name");
        errors.add("phone", "bad");
        assert_eq!(
            errors.to_json(),
            serde_json::json!({"name": ["This field is required."], "phone": ["bad"]})
        );
        assert_eq!(errors.to_string(), "invalid fields: name, phone");
        assert!(errors.into_result(()).is_err());
        assert_eq!(FieldErrors::new().into_result(7), Ok(7));
    }
}
