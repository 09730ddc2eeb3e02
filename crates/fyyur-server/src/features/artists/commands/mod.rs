pub mod create;
pub mod update;

pub use create::{CreateArtistCommand, CreateArtistError, CreateArtistResponse};
pub use update::{UpdateArtistCommand, UpdateArtistError, UpdateArtistResponse};
