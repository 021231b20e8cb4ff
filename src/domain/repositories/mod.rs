//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `UnitOfWork` — a provider bound to one transaction, committed explicitly
//! - `UnitOfWorkFactory` — begins read-only or read-write units of work

use async_trait::async_trait;

use super::customer::CustomerRepository;
use super::employee::EmployeeRepository;
use super::pet_store::PetStoreRepository;
use crate::shared::errors::DomainResult;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let store = repos.pet_stores().find_by_id(1).await?;
///     let staff = repos.employees().find_by_pet_store(1).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn pet_stores(&self) -> Box<dyn PetStoreRepository + '_>;
    fn employees(&self) -> Box<dyn EmployeeRepository + '_>;
    fn customers(&self) -> Box<dyn CustomerRepository + '_>;
}

// ── Unit of work ────────────────────────────────────────────────

/// Access mode of a unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxMode {
    ReadOnly,
    ReadWrite,
}

/// Repositories bound to a single transaction.
///
/// Dropping a unit of work without calling [`UnitOfWork::commit`] rolls it back.
#[async_trait]
pub trait UnitOfWork: RepositoryProvider {
    async fn commit(self: Box<Self>) -> DomainResult<()>;
}

#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    async fn begin(&self, mode: TxMode) -> DomainResult<Box<dyn UnitOfWork>>;
}
