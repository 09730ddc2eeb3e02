pub mod commands;
pub mod form;
pub mod queries;
pub mod routes;

pub use commands::{
    CreateArtistCommand, CreateArtistError, CreateArtistResponse, UpdateArtistCommand,
    UpdateArtistError, UpdateArtistResponse,
};

pub use form::ArtistForm;

pub use queries::{ArtistProfile, GetArtistError, GetArtistQuery, SearchArtistsQuery};

pub use routes::artists_routes;
