//! Pet store use-cases: stores, their employees and their customers.

pub mod service;

pub use service::PetStoreService;
