pub mod directory;
pub mod edit_form;
pub mod get;
pub mod search;

pub use directory::VenueDirectoryError;
pub use edit_form::VenueEditFormError;
pub use get::{GetVenueError, GetVenueQuery, VenueProfile};
pub use search::{SearchVenuesError, SearchVenuesQuery};
