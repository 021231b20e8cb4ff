//! SeaORM implementation of EmployeeRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use tracing::info;

use super::db_err;
use crate::domain::{DomainResult, Employee, EmployeeFields, EmployeeRepository};
use crate::infrastructure::database::entities::employee;

fn entity_to_domain(m: employee::Model) -> Employee {
    Employee {
        id: m.id,
        pet_store_id: m.pet_store_id,
        first_name: m.first_name,
        last_name: m.last_name,
        phone: m.phone,
        job_title: m.job_title,
    }
}

pub struct SeaOrmEmployeeRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> SeaOrmEmployeeRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<C> EmployeeRepository for SeaOrmEmployeeRepository<'_, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Employee>> {
        let model = employee::Entity::find_by_id(id)
            .one(self.conn)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_pet_store(&self, pet_store_id: i32) -> DomainResult<Vec<Employee>> {
        let models = employee::Entity::find()
            .filter(employee::Column::PetStoreId.eq(pet_store_id))
            .order_by_asc(employee::Column::Id)
            .all(self.conn)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn create(&self, pet_store_id: i32, fields: EmployeeFields) -> DomainResult<Employee> {
        let model = employee::ActiveModel {
            id: NotSet,
            pet_store_id: Set(pet_store_id),
            first_name: Set(fields.first_name),
            last_name: Set(fields.last_name),
            phone: Set(fields.phone),
            job_title: Set(fields.job_title),
        };
        let result = model.insert(self.conn).await.map_err(db_err)?;
        info!(employee_id = result.id, pet_store_id, "Employee created");
        Ok(entity_to_domain(result))
    }

    async fn update(&self, e: Employee) -> DomainResult<Employee> {
        let model = employee::ActiveModel {
            id: Set(e.id),
            pet_store_id: Set(e.pet_store_id),
            first_name: Set(e.first_name),
            last_name: Set(e.last_name),
            phone: Set(e.phone),
            job_title: Set(e.job_title),
        };
        let result = model.update(self.conn).await.map_err(db_err)?;
        info!(employee_id = result.id, "Employee updated");
        Ok(entity_to_domain(result))
    }
}
