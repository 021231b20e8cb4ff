//! SeaORM implementation of PetStoreRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use tracing::info;

use super::db_err;
use crate::domain::{DomainError, DomainResult, PetStore, PetStoreFields, PetStoreRepository};
use crate::infrastructure::database::entities::{employee, pet_store, pet_store_customer};

fn entity_to_domain(m: pet_store::Model) -> PetStore {
    PetStore {
        id: m.id,
        name: m.name,
        address: m.address,
        city: m.city,
        state: m.state,
        zip: m.zip,
        phone: m.phone,
    }
}

/// A unique-index hit on `address` is a duplicate, anything else a storage failure.
fn write_err(e: DbErr, address: &str) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::DuplicateKey(format!(
            "Pet store at address {} already exists",
            address
        )),
        _ => db_err(e),
    }
}

pub struct SeaOrmPetStoreRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> SeaOrmPetStoreRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<C> PetStoreRepository for SeaOrmPetStoreRepository<'_, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PetStore>> {
        let model = pet_store::Entity::find_by_id(id)
            .one(self.conn)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_address(&self, address: &str) -> DomainResult<Option<PetStore>> {
        let model = pet_store::Entity::find()
            .filter(pet_store::Column::Address.eq(address))
            .one(self.conn)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<PetStore>> {
        let models = pet_store::Entity::find()
            .order_by_asc(pet_store::Column::Id)
            .all(self.conn)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn create(&self, fields: PetStoreFields) -> DomainResult<PetStore> {
        let address = fields.address.clone();
        let model = pet_store::ActiveModel {
            id: NotSet,
            name: Set(fields.name),
            address: Set(fields.address),
            city: Set(fields.city),
            state: Set(fields.state),
            zip: Set(fields.zip),
            phone: Set(fields.phone),
        };
        let result = model
            .insert(self.conn)
            .await
            .map_err(|e| write_err(e, &address))?;
        info!(pet_store_id = result.id, address = %result.address, "Pet store created");
        Ok(entity_to_domain(result))
    }

    async fn update(&self, store: PetStore) -> DomainResult<PetStore> {
        let address = store.address.clone();
        let model = pet_store::ActiveModel {
            id: Set(store.id),
            name: Set(store.name),
            address: Set(store.address),
            city: Set(store.city),
            state: Set(store.state),
            zip: Set(store.zip),
            phone: Set(store.phone),
        };
        let result = model
            .update(self.conn)
            .await
            .map_err(|e| write_err(e, &address))?;
        info!(pet_store_id = result.id, "Pet store updated");
        Ok(entity_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        // Foreign keys cascade as well; explicit deletes keep this independent
        // of the SQLite foreign_keys pragma.
        employee::Entity::delete_many()
            .filter(employee::Column::PetStoreId.eq(id))
            .exec(self.conn)
            .await
            .map_err(db_err)?;
        pet_store_customer::Entity::delete_many()
            .filter(pet_store_customer::Column::PetStoreId.eq(id))
            .exec(self.conn)
            .await
            .map_err(db_err)?;

        let result = pet_store::Entity::delete_by_id(id)
            .exec(self.conn)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("PetStore", id));
        }
        info!(pet_store_id = id, "Pet store deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_support::migrated_db;

    fn fields(address: &str) -> PetStoreFields {
        PetStoreFields {
            name: Some("Paws".into()),
            address: address.into(),
            city: Some("Springfield".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_then_find_by_id_and_address() {
        let db = migrated_db().await;
        let repo = SeaOrmPetStoreRepository::new(&db);

        let created = repo.create(fields("1 Main St")).await.unwrap();
        assert!(created.id > 0);

        let by_id = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(by_id.as_ref(), Some(&created));

        let by_address = repo.find_by_address("1 Main St").await.unwrap();
        assert_eq!(by_address, Some(created));
        assert!(repo.find_by_address("nowhere").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unique_index_hit_on_create_is_a_duplicate_key() {
        let db = migrated_db().await;
        let repo = SeaOrmPetStoreRepository::new(&db);

        repo.create(fields("1 Main St")).await.unwrap();
        let err = repo.create(fields("1 Main St")).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateKey(ref msg) if msg.contains("1 Main St")));
    }

    #[tokio::test]
    async fn unique_index_hit_on_update_is_a_duplicate_key() {
        let db = migrated_db().await;
        let repo = SeaOrmPetStoreRepository::new(&db);

        repo.create(fields("1 Main St")).await.unwrap();
        let mut other = repo.create(fields("2 Oak Ave")).await.unwrap();
        other.address = "1 Main St".into();

        let err = repo.update(other).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateKey(_)));
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let db = migrated_db().await;
        let repo = SeaOrmPetStoreRepository::new(&db);

        let a = repo.create(fields("a")).await.unwrap();
        let b = repo.create(fields("b")).await.unwrap();

        let ids: Vec<i32> = repo.find_all().await.unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn delete_missing_store_is_not_found() {
        let db = migrated_db().await;
        let repo = SeaOrmPetStoreRepository::new(&db);

        let err = repo.delete(99).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
