pub mod commands;
pub mod form;
pub mod queries;
pub mod routes;

pub use commands::{CreateShowCommand, CreateShowError, CreateShowResponse};
pub use form::ShowForm;
pub use queries::ListShowsError;
pub use routes::shows_routes;
