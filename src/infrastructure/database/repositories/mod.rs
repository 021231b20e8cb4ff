//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories. Each one borrows a connection, so the
//! same code runs against the pool or against an open transaction.

pub mod customer_repository;
pub mod employee_repository;
pub mod pet_store_repository;
pub mod repository_provider;

pub use customer_repository::SeaOrmCustomerRepository;
pub use employee_repository::SeaOrmEmployeeRepository;
pub use pet_store_repository::SeaOrmPetStoreRepository;
pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}
