//! Transaction-scoped repositories
//!
//! Each service operation runs inside one `SeaOrmUnitOfWork`: read-only for
//! retrievals, read-write for mutations.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction,
    TransactionTrait,
};
use tracing::debug;

use super::repositories::{db_err, SeaOrmRepositoryProvider};
use crate::domain::{
    CustomerRepository, DomainResult, EmployeeRepository, PetStoreRepository, RepositoryProvider,
    TxMode, UnitOfWork, UnitOfWorkFactory,
};

/// SQLite has no per-transaction access mode, so none is requested there.
fn access_mode(backend: DatabaseBackend, mode: TxMode) -> Option<AccessMode> {
    match (backend, mode) {
        (DatabaseBackend::Sqlite, _) => None,
        (_, TxMode::ReadOnly) => Some(AccessMode::ReadOnly),
        (_, TxMode::ReadWrite) => Some(AccessMode::ReadWrite),
    }
}

/// Repositories bound to an open `DatabaseTransaction`.
///
/// Rolled back on drop unless committed.
pub struct SeaOrmUnitOfWork {
    repos: SeaOrmRepositoryProvider<DatabaseTransaction>,
}

impl RepositoryProvider for SeaOrmUnitOfWork {
    fn pet_stores(&self) -> Box<dyn PetStoreRepository + '_> {
        self.repos.pet_stores()
    }

    fn employees(&self) -> Box<dyn EmployeeRepository + '_> {
        self.repos.employees()
    }

    fn customers(&self) -> Box<dyn CustomerRepository + '_> {
        self.repos.customers()
    }
}

#[async_trait]
impl UnitOfWork for SeaOrmUnitOfWork {
    async fn commit(self: Box<Self>) -> DomainResult<()> {
        self.repos.into_inner().commit().await.map_err(db_err)?;
        debug!("Transaction committed");
        Ok(())
    }
}

/// Begins units of work on the shared connection pool.
#[derive(Clone)]
pub struct SeaOrmUnitOfWorkFactory {
    db: DatabaseConnection,
}

impl SeaOrmUnitOfWorkFactory {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnitOfWorkFactory for SeaOrmUnitOfWorkFactory {
    async fn begin(&self, mode: TxMode) -> DomainResult<Box<dyn UnitOfWork>> {
        let txn = self
            .db
            .begin_with_config(None, access_mode(self.db.get_database_backend(), mode))
            .await
            .map_err(db_err)?;
        debug!(?mode, "Transaction started");
        Ok(Box::new(SeaOrmUnitOfWork {
            repos: SeaOrmRepositoryProvider::new(txn),
        }))
    }
}
