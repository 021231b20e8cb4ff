//! Employee repository interface

use async_trait::async_trait;

use super::model::{Employee, EmployeeFields};
use crate::domain::DomainResult;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Employee>>;
    async fn find_by_pet_store(&self, pet_store_id: i32) -> DomainResult<Vec<Employee>>;
    async fn create(&self, pet_store_id: i32, fields: EmployeeFields) -> DomainResult<Employee>;
    async fn update(&self, employee: Employee) -> DomainResult<Employee>;
}
