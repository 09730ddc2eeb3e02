pub mod commands;
pub mod form;
pub mod queries;
pub mod routes;

pub use commands::{
    CreateVenueCommand, CreateVenueError, CreateVenueResponse, DeleteVenueCommand,
    DeleteVenueError, DeleteVenueResponse, UpdateVenueCommand, UpdateVenueError,
    UpdateVenueResponse,
};

pub use form::VenueForm;

pub use queries::{GetVenueError, GetVenueQuery, SearchVenuesQuery, VenueProfile};

pub use routes::venues_routes;
