//! Customer repository interface

use async_trait::async_trait;

use super::model::{Customer, CustomerFields};
use crate::domain::DomainResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Loads the customer together with its store ids.
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Customer>>;
    async fn find_by_pet_store(&self, pet_store_id: i32) -> DomainResult<Vec<Customer>>;
    async fn create(&self, fields: CustomerFields) -> DomainResult<Customer>;
    async fn update(&self, customer: Customer) -> DomainResult<Customer>;
    /// Associates the customer with the store. Linking twice is a no-op.
    async fn link_pet_store(&self, customer_id: i32, pet_store_id: i32) -> DomainResult<()>;
}
