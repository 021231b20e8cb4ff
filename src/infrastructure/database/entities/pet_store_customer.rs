//! Store ↔ customer relation table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pet_store_customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pet_store_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub customer_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pet_store::Entity",
        from = "Column::PetStoreId",
        to = "super::pet_store::Column::Id",
        on_delete = "Cascade"
    )]
    PetStore,
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_delete = "Cascade"
    )]
    Customer,
}

impl Related<super::pet_store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PetStore.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
