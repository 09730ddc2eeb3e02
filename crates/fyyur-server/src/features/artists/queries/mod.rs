pub mod edit_form;
pub mod get;
pub mod list;
pub mod search;

pub use edit_form::ArtistEditFormError;
pub use get::{ArtistProfile, GetArtistError, GetArtistQuery};
pub use list::ListArtistsError;
pub use search::{SearchArtistsError, SearchArtistsQuery};
