//! Fyyur Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared pieces used by the Fyyur workspace members:
//!
//! - **Logging**: `tracing` subscriber setup with console and rolling-file output
//! - **Choices**: the enumerated genre and US state values accepted by the forms
//!
//! # Example
//!
//! ```no_run
//! use fyyur_common::logging::{init_logging, LogConfig};
//! use fyyur_common::choices::is_valid_genre;
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_logging(&LogConfig::for_mode(true))?;
//!     assert!(is_valid_genre("Jazz"));
//!     Ok(())
//! }
//! ```

pub mod choices;
pub mod logging;

pub use choices::{is_valid_genre, is_valid_state, GENRES, STATES};
