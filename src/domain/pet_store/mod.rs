//! Pet store aggregate
//!
//! A store owns its employees and is linked to customers through a relation table.

pub mod model;
pub mod repository;

pub use model::{PetStore, PetStoreData, PetStoreDetails, PetStoreFields};
pub use repository::PetStoreRepository;
