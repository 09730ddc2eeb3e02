pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateVenueCommand, CreateVenueError, CreateVenueResponse};
pub use delete::{DeleteVenueCommand, DeleteVenueError, DeleteVenueResponse};
pub use update::{UpdateVenueCommand, UpdateVenueError, UpdateVenueResponse};
