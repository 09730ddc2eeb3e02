//! Show time parsing and display

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

/// How a show's start time is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// `Saturday May, 21, 2019 at 9:30PM`
    Full,
    /// `Sat 05, 21, 2019 9:30PM`
    #[default]
    Medium,
}

impl DateFormat {
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
            DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

/// `?date_format=` query parameter accepted by profile and list pages
#[derive(Debug, Default, Deserialize)]
pub struct DateFormatQuery {
    #[serde(default)]
    pub date_format: DateFormat,
}

pub fn format_datetime(value: DateTime<Utc>, format: DateFormat) -> String {
    value.format(format.pattern()).to_string()
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a submitted start time. Values without an offset are taken as UTC.
pub fn parse_start_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}
