pub mod customer;
pub mod employee;
pub mod pet_store;
pub mod repositories;
pub mod upsert;

// Re-export commonly used types
pub use customer::{Customer, CustomerData, CustomerFields, CustomerRepository};
pub use employee::{Employee, EmployeeData, EmployeeFields, EmployeeRepository};
pub use pet_store::{PetStore, PetStoreData, PetStoreDetails, PetStoreFields, PetStoreRepository};
pub use repositories::{RepositoryProvider, TxMode, UnitOfWork, UnitOfWorkFactory};
pub use upsert::Upsert;

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::{DomainError, DomainResult};
