//! Pet store repository interface

use async_trait::async_trait;

use super::model::{PetStore, PetStoreFields};
use crate::domain::DomainResult;

#[async_trait]
pub trait PetStoreRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PetStore>>;
    async fn find_by_address(&self, address: &str) -> DomainResult<Option<PetStore>>;
    async fn find_all(&self) -> DomainResult<Vec<PetStore>>;
    async fn create(&self, fields: PetStoreFields) -> DomainResult<PetStore>;
    async fn update(&self, store: PetStore) -> DomainResult<PetStore>;
    /// Deletes the store, its employees and its customer links.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
