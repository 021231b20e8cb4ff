//! Create employees table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_pet_stores::PetStores;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::PetStoreId).integer().not_null())
                    .col(ColumnDef::new(Employees::FirstName).string())
                    .col(ColumnDef::new(Employees::LastName).string())
                    .col(ColumnDef::new(Employees::Phone).string())
                    .col(ColumnDef::new(Employees::JobTitle).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_pet_store")
                            .from(Employees::Table, Employees::PetStoreId)
                            .to(PetStores::Table, PetStores::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employees_pet_store")
                    .table(Employees::Table)
                    .col(Employees::PetStoreId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Employees {
    Table,
    Id,
    PetStoreId,
    FirstName,
    LastName,
    Phone,
    JobTitle,
}
