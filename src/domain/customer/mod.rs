//! Customer aggregate
//!
//! Customers are shared between stores; the link lives in a relation table.

pub mod model;
pub mod repository;

pub use model::{Customer, CustomerData, CustomerFields};
pub use repository::CustomerRepository;
