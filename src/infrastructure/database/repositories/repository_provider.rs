//! SeaORM implementation of RepositoryProvider

use sea_orm::ConnectionTrait;

use crate::domain::{CustomerRepository, EmployeeRepository, PetStoreRepository, RepositoryProvider};

use super::customer_repository::SeaOrmCustomerRepository;
use super::employee_repository::SeaOrmEmployeeRepository;
use super::pet_store_repository::SeaOrmPetStoreRepository;

/// Repository provider over any SeaORM connection: the pool itself or an
/// open `DatabaseTransaction`.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let store = repos.pet_stores().find_by_id(1).await?;
/// let staff = repos.employees().find_by_pet_store(1).await?;
/// ```
pub struct SeaOrmRepositoryProvider<C> {
    conn: C,
}

impl<C> SeaOrmRepositoryProvider<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    pub fn into_inner(self) -> C {
        self.conn
    }
}

impl<C> RepositoryProvider for SeaOrmRepositoryProvider<C>
where
    C: ConnectionTrait + Send + Sync,
{
    fn pet_stores(&self) -> Box<dyn PetStoreRepository + '_> {
        Box::new(SeaOrmPetStoreRepository::new(&self.conn))
    }

    fn employees(&self) -> Box<dyn EmployeeRepository + '_> {
        Box::new(SeaOrmEmployeeRepository::new(&self.conn))
    }

    fn customers(&self) -> Box<dyn CustomerRepository + '_> {
        Box::new(SeaOrmCustomerRepository::new(&self.conn))
    }
}
