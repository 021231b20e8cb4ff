//! SeaORM implementation of CustomerRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};
use sea_orm::sea_query::JoinType;
use tracing::{debug, info};

use super::db_err;
use crate::domain::{Customer, CustomerFields, CustomerRepository, DomainResult};
use crate::infrastructure::database::entities::{customer, pet_store_customer};

fn entity_to_domain(m: customer::Model, pet_store_ids: Vec<i32>) -> Customer {
    Customer {
        id: m.id,
        first_name: m.first_name,
        last_name: m.last_name,
        email: m.email,
        pet_store_ids,
    }
}

pub struct SeaOrmCustomerRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C> SeaOrmCustomerRepository<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Store ids for each of the given customers, ascending.
    async fn store_ids_by_customer(
        &self,
        customer_ids: Vec<i32>,
    ) -> DomainResult<HashMap<i32, Vec<i32>>> {
        let links = pet_store_customer::Entity::find()
            .filter(pet_store_customer::Column::CustomerId.is_in(customer_ids))
            .order_by_asc(pet_store_customer::Column::PetStoreId)
            .all(self.conn)
            .await
            .map_err(db_err)?;

        let mut by_customer: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in links {
            by_customer
                .entry(link.customer_id)
                .or_default()
                .push(link.pet_store_id);
        }
        Ok(by_customer)
    }
}

#[async_trait]
impl<C> CustomerRepository for SeaOrmCustomerRepository<'_, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Customer>> {
        let Some(model) = customer::Entity::find_by_id(id)
            .one(self.conn)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let mut stores = self.store_ids_by_customer(vec![id]).await?;
        let pet_store_ids = stores.remove(&id).unwrap_or_default();
        Ok(Some(entity_to_domain(model, pet_store_ids)))
    }

    async fn find_by_pet_store(&self, pet_store_id: i32) -> DomainResult<Vec<Customer>> {
        let models = customer::Entity::find()
            .join(
                JoinType::InnerJoin,
                customer::Relation::PetStoreCustomers.def(),
            )
            .filter(pet_store_customer::Column::PetStoreId.eq(pet_store_id))
            .order_by_asc(customer::Column::Id)
            .all(self.conn)
            .await
            .map_err(db_err)?;

        let ids = models.iter().map(|m| m.id).collect();
        let mut stores = self.store_ids_by_customer(ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let pet_store_ids = stores.remove(&m.id).unwrap_or_default();
                entity_to_domain(m, pet_store_ids)
            })
            .collect())
    }

    async fn create(&self, fields: CustomerFields) -> DomainResult<Customer> {
        let model = customer::ActiveModel {
            id: NotSet,
            first_name: Set(fields.first_name),
            last_name: Set(fields.last_name),
            email: Set(fields.email),
        };
        let result = model.insert(self.conn).await.map_err(db_err)?;
        info!(customer_id = result.id, "Customer created");
        Ok(entity_to_domain(result, Vec::new()))
    }

    async fn update(&self, c: Customer) -> DomainResult<Customer> {
        let model = customer::ActiveModel {
            id: Set(c.id),
            first_name: Set(c.first_name),
            last_name: Set(c.last_name),
            email: Set(c.email),
        };
        let result = model.update(self.conn).await.map_err(db_err)?;
        info!(customer_id = result.id, "Customer updated");
        Ok(entity_to_domain(result, c.pet_store_ids))
    }

    async fn link_pet_store(&self, customer_id: i32, pet_store_id: i32) -> DomainResult<()> {
        let existing = pet_store_customer::Entity::find_by_id((pet_store_id, customer_id))
            .one(self.conn)
            .await
            .map_err(db_err)?;
        if existing.is_some() {
            debug!(customer_id, pet_store_id, "Customer already linked to pet store");
            return Ok(());
        }

        pet_store_customer::ActiveModel {
            pet_store_id: Set(pet_store_id),
            customer_id: Set(customer_id),
        }
        .insert(self.conn)
        .await
        .map_err(db_err)?;
        info!(customer_id, pet_store_id, "Customer linked to pet store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PetStoreFields, PetStoreRepository};
    use crate::infrastructure::database::repositories::SeaOrmPetStoreRepository;
    use crate::infrastructure::database::test_support::migrated_db;

    #[tokio::test]
    async fn linking_is_idempotent_and_visible_from_both_sides() {
        let db = migrated_db().await;
        let stores = SeaOrmPetStoreRepository::new(&db);
        let repo = SeaOrmCustomerRepository::new(&db);

        let a = stores
            .create(PetStoreFields { address: "a".into(), ..Default::default() })
            .await
            .unwrap();
        let b = stores
            .create(PetStoreFields { address: "b".into(), ..Default::default() })
            .await
            .unwrap();
        let customer = repo
            .create(CustomerFields {
                email: Some("ada@example.com".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        repo.link_pet_store(customer.id, b.id).await.unwrap();
        repo.link_pet_store(customer.id, a.id).await.unwrap();
        repo.link_pet_store(customer.id, a.id).await.unwrap();

        let loaded = repo.find_by_id(customer.id).await.unwrap().unwrap();
        assert_eq!(loaded.pet_store_ids, vec![a.id, b.id]);

        let at_a = repo.find_by_pet_store(a.id).await.unwrap();
        assert_eq!(at_a.len(), 1);
        assert_eq!(at_a[0].id, customer.id);
        assert_eq!(at_a[0].pet_store_ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn deleting_a_store_unlinks_but_keeps_the_customer() {
        let db = migrated_db().await;
        let stores = SeaOrmPetStoreRepository::new(&db);
        let repo = SeaOrmCustomerRepository::new(&db);

        let store = stores
            .create(PetStoreFields { address: "a".into(), ..Default::default() })
            .await
            .unwrap();
        let customer = repo.create(CustomerFields::default()).await.unwrap();
        repo.link_pet_store(customer.id, store.id).await.unwrap();

        stores.delete(store.id).await.unwrap();

        let loaded = repo.find_by_id(customer.id).await.unwrap().unwrap();
        assert!(loaded.pet_store_ids.is_empty());
    }
}
