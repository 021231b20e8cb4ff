//! Pet store service — application-layer orchestration
//!
//! All store, employee and customer business rules live here.
//! HTTP handlers are thin wrappers that delegate to this service.

use std::convert::Infallible;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    Customer, CustomerData, DomainError, DomainResult, Employee, EmployeeData, PetStore,
    PetStoreData, PetStoreDetails, RepositoryProvider, TxMode, UnitOfWorkFactory, Upsert,
};

/// Service for pet store operations.
///
/// Every public operation runs in its own unit of work.
pub struct PetStoreService {
    uow: Arc<dyn UnitOfWorkFactory>,
}

impl PetStoreService {
    pub fn new(uow: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self { uow }
    }

    // ── Stores ──────────────────────────────────────────────────

    /// Create a store (no id) or update the store with the given id.
    ///
    /// Fails with `DuplicateKey` when another store already has the address.
    pub async fn save_pet_store(&self, data: PetStoreData) -> DomainResult<PetStoreDetails> {
        let uow = self.uow.begin(TxMode::ReadWrite).await?;
        let repo = uow.pet_stores();

        let saved = match data.upsert() {
            Upsert::Create => {
                ensure_address_free(&*uow, &data.fields.address, None).await?;
                repo.create(data.fields).await?
            }
            Upsert::UpdateExisting(id) => {
                let mut store = find_pet_store(&*uow, id).await?;
                if store.address != data.fields.address {
                    ensure_address_free(&*uow, &data.fields.address, Some(id)).await?;
                }
                store.apply(data.fields);
                repo.update(store).await?
            }
        };
        drop(repo);

        let details = load_details(&*uow, saved).await?;
        uow.commit().await?;
        Ok(details)
    }

    pub async fn retrieve_all_pet_stores(&self) -> DomainResult<Vec<PetStoreDetails>> {
        let uow = self.uow.begin(TxMode::ReadOnly).await?;

        let stores = uow.pet_stores().find_all().await?;
        let mut all = Vec::with_capacity(stores.len());
        for store in stores {
            all.push(load_details(&*uow, store).await?);
        }

        uow.commit().await?;
        Ok(all)
    }

    pub async fn retrieve_pet_store_by_id(&self, id: i32) -> DomainResult<PetStoreDetails> {
        let uow = self.uow.begin(TxMode::ReadOnly).await?;
        let store = find_pet_store(&*uow, id).await?;
        let details = load_details(&*uow, store).await?;
        uow.commit().await?;
        Ok(details)
    }

    /// Deletes the store with its employees and customer links.
    pub async fn delete_pet_store_by_id(&self, id: i32) -> DomainResult<()> {
        let uow = self.uow.begin(TxMode::ReadWrite).await?;
        let store = find_pet_store(&*uow, id).await?;
        uow.pet_stores().delete(store.id).await?;
        uow.commit().await?;
        info!(pet_store_id = id, "Pet store removed");
        Ok(())
    }

    /// Bulk deletion is never allowed.
    pub async fn delete_all_pet_stores(&self) -> DomainResult<Infallible> {
        warn!("Rejected attempt to delete all pet stores");
        Err(DomainError::UnsupportedOperation(
            "Deleting all pet stores is not allowed".into(),
        ))
    }

    // ── Employees ───────────────────────────────────────────────

    /// Create or update an employee of the given store.
    ///
    /// An existing employee can only be changed through the store that owns it.
    pub async fn save_employee(
        &self,
        pet_store_id: i32,
        data: EmployeeData,
    ) -> DomainResult<Employee> {
        let uow = self.uow.begin(TxMode::ReadWrite).await?;
        let store = find_pet_store(&*uow, pet_store_id).await?;
        let repo = uow.employees();

        let saved = match data.upsert() {
            Upsert::Create => repo.create(store.id, data.fields).await?,
            Upsert::UpdateExisting(id) => {
                let mut employee = repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| DomainError::not_found("Employee", id))?;
                if !employee.works_at(store.id) {
                    return Err(DomainError::InvalidArgument(format!(
                        "Employee with id={} does not work at pet store with id={}",
                        id, store.id
                    )));
                }
                employee.apply(data.fields);
                repo.update(employee).await?
            }
        };
        drop(repo);

        uow.commit().await?;
        Ok(saved)
    }

    // ── Customers ───────────────────────────────────────────────

    /// Create a customer of the given store, or update an existing one.
    ///
    /// An existing customer must already be associated with the store.
    pub async fn save_customer(
        &self,
        pet_store_id: i32,
        data: CustomerData,
    ) -> DomainResult<Customer> {
        let uow = self.uow.begin(TxMode::ReadWrite).await?;
        let store = find_pet_store(&*uow, pet_store_id).await?;
        let repo = uow.customers();

        let mut saved = match data.upsert() {
            Upsert::Create => repo.create(data.fields).await?,
            Upsert::UpdateExisting(id) => {
                let mut customer = repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| DomainError::not_found("Customer", id))?;
                if !customer.is_member_of(store.id) {
                    return Err(DomainError::InvalidArgument(format!(
                        "Customer with id={} is not a member of pet store with id={}",
                        id, store.id
                    )));
                }
                customer.apply(data.fields);
                repo.update(customer).await?
            }
        };

        repo.link_pet_store(saved.id, store.id).await?;
        if !saved.is_member_of(store.id) {
            saved.pet_store_ids.push(store.id);
            saved.pet_store_ids.sort_unstable();
        }
        drop(repo);

        uow.commit().await?;
        Ok(saved)
    }
}

// ── Helpers ─────────────────────────────────────────────────────

async fn find_pet_store<R: RepositoryProvider + ?Sized>(
    repos: &R,
    id: i32,
) -> DomainResult<PetStore> {
    repos
        .pet_stores()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("PetStore", id))
}

/// Fails when a store other than `owner` already uses the address.
async fn ensure_address_free<R: RepositoryProvider + ?Sized>(
    repos: &R,
    address: &str,
    owner: Option<i32>,
) -> DomainResult<()> {
    match repos.pet_stores().find_by_address(address).await? {
        Some(existing) if Some(existing.id) != owner => Err(DomainError::DuplicateKey(format!(
            "Pet store at address {} already exists",
            address
        ))),
        _ => Ok(()),
    }
}

async fn load_details<R: RepositoryProvider + ?Sized>(
    repos: &R,
    store: PetStore,
) -> DomainResult<PetStoreDetails> {
    let employees = repos.employees().find_by_pet_store(store.id).await?;
    let customers = repos.customers().find_by_pet_store(store.id).await?;
    Ok(PetStoreDetails {
        store,
        employees,
        customers,
    })
}
