//! Database error handling utilities
//!
//! Helpers for turning constraint violations into domain errors.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fyyur_server::features::shared::error_helpers::map_foreign_key_violation;
//!
//! db::shows::insert(&mut *tx, &show, image_link)
//!     .await
//!     .map_err(|e| map_foreign_key_violation(e, CreateShowError::UnknownReferent, CreateShowError::Database))?;
//! ```

use sqlx::Error as SqlxError;

/// Check if the error is a foreign key violation
pub fn is_foreign_key_violation(error: &SqlxError) -> bool {
    if let SqlxError::Database(db_err) = error {
        return db_err.is_foreign_key_violation();
    }
    false
}

/// Handle foreign key constraint violation with a custom error mapper
///
/// Returns `fk_error` on a foreign key violation, otherwise wraps the
/// original error with `default_wrapper`.
pub fn map_foreign_key_violation<E, F>(error: SqlxError, fk_error: E, default_wrapper: F) -> E
where
    F: FnOnce(SqlxError) -> E,
{
    if is_foreign_key_violation(&error) {
        fk_error
    } else {
        default_wrapper(error)
    }
}
