//! Create pet_store_customers relation table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_pet_stores::PetStores;
use super::m20240101_000003_create_customers::Customers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PetStoreCustomers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PetStoreCustomers::PetStoreId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PetStoreCustomers::CustomerId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(PetStoreCustomers::PetStoreId)
                            .col(PetStoreCustomers::CustomerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pet_store_customers_pet_store")
                            .from(PetStoreCustomers::Table, PetStoreCustomers::PetStoreId)
                            .to(PetStores::Table, PetStores::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pet_store_customers_customer")
                            .from(PetStoreCustomers::Table, PetStoreCustomers::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PetStoreCustomers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum PetStoreCustomers {
    Table,
    PetStoreId,
    CustomerId,
}
