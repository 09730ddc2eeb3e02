//! Shared validation utilities
//!
//! Field-level checks used by the venue, artist and show forms. Each check
//! returns a small error enum whose `Display` text is the message shown next
//! to the field.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fyyur_server::features::shared::validation::{validate_name, validate_url};
//!
//! validate_name("The Musical Hop", MAX_NAME_LENGTH)?;
//!
//! if let Some(url) = &website {
//!     validate_url(url)?;
//! }
//! ```

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Longest accepted name, city or address.
pub const MAX_NAME_LENGTH: usize = 120;

/// Longest accepted link.
pub const MAX_URL_LENGTH: usize = 500;

/// Errors that can occur during name validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameValidationError {
    #[error("This field is required.")]
    Required,

    #[error("Field cannot be longer than {max_length} characters.")]
    TooLong { max_length: usize },
}

/// Errors that can occur during URL validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("Invalid URL: must start with http:// or https://")]
    InvalidFormat,

    #[error("Field cannot be longer than {max_length} characters.")]
    TooLong { max_length: usize },
}

/// Errors that can occur during phone validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhoneValidationError {
    #[error("Invalid phone number: expected a form like 123-456-7890")]
    InvalidFormat,
}

/// A value outside an enumerated choice list
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{value}' is not a valid choice")]
pub struct ChoiceValidationError {
    pub value: String,
}

/// Validate a required free-text field
///
/// # Rules
/// - Must not be empty (after trimming whitespace)
/// - Must not exceed max_length characters
pub fn validate_name(name: &str, max_length: usize) -> Result<(), NameValidationError> {
    if name.trim().is_empty() {
        return Err(NameValidationError::Required);
    }

    if name.chars().count() > max_length {
        return Err(NameValidationError::TooLong { max_length });
    }

    Ok(())
}

/// Validate a URL field
///
/// Empty strings are treated as absent and accepted.
pub fn validate_url(url: &str) -> Result<(), UrlValidationError> {
    if url.is_empty() {
        return Ok(());
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong {
            max_length: MAX_URL_LENGTH,
        });
    }

    if !is_valid_url(url) {
        return Err(UrlValidationError::InvalidFormat);
    }

    Ok(())
}

/// Check if a URL is valid (starts with http:// or https:// and has a host part)
#[inline]
pub fn is_valid_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    matches!(rest, Some(rest) if !rest.is_empty() && !rest.contains(char::is_whitespace))
}

// Ten digits, grouped 3-3-4 and separated by `-`, `.`, a space, or nothing.
static PHONE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{3}[-. ]?\d{3}[-. ]?\d{4}$").ok());

/// Validate a North American phone number such as `123-456-7890`
pub fn validate_phone(phone: &str) -> Result<(), PhoneValidationError> {
    match PHONE_PATTERN.as_ref() {
        Some(pattern) if pattern.is_match(phone) => Ok(()),
        _ => Err(PhoneValidationError::InvalidFormat),
    }
}

/// Validate that `value` is one of `choices` (exact match)
pub fn validate_choice(value: &str, choices: &[&str]) -> Result<(), ChoiceValidationError> {
    if choices.contains(&value) {
        Ok(())
    } else {
        Err(ChoiceValidationError {
            value: value.to_string(),
        })
    }
}
