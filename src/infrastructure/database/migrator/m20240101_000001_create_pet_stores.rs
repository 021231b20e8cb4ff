//! Create pet_stores table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PetStores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PetStores::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PetStores::Name).string())
                    .col(ColumnDef::new(PetStores::Address).string().not_null())
                    .col(ColumnDef::new(PetStores::City).string())
                    .col(ColumnDef::new(PetStores::State).string())
                    .col(ColumnDef::new(PetStores::Zip).string())
                    .col(ColumnDef::new(PetStores::Phone).string())
                    .to_owned(),
            )
            .await?;

        // Create unique index on address
        manager
            .create_index(
                Index::create()
                    .name("idx_pet_stores_address")
                    .table(PetStores::Table)
                    .col(PetStores::Address)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PetStores::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum PetStores {
    Table,
    Id,
    Name,
    Address,
    City,
    State,
    Zip,
    Phone,
}
