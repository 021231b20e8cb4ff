//! Employee aggregate

pub mod model;
pub mod repository;

pub use model::{Employee, EmployeeData, EmployeeFields};
pub use repository::EmployeeRepository;
