//! Pet store resource: stores, employees and customers

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::PetStoreState;
