//! Shared utilities and types for feature modules
//!
//! # Contents
//!
//! - **forms**: submitted field access, per-field errors, form schemas
//! - **validation**: field-level checks
//! - **datetime**: start time parsing and display formats
//! - **listing**: past/upcoming partitioning, city grouping, search payloads
//! - **notice**: user-facing success and failure messages
//! - **error_helpers**: database constraint error handling
//! - **test_helpers**: test fixtures (test-only)

pub mod datetime;
pub mod error_helpers;
pub mod forms;
pub mod listing;
pub mod notice;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use datetime::{DateFormat, DateFormatQuery};
pub use forms::{FieldErrors, FormFields, FormSchema};
pub use listing::{PartitionedShows, SearchResults, ShowDisplay};
