//! Customer entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(nullable)]
    pub first_name: Option<String>,

    #[sea_orm(nullable)]
    pub last_name: Option<String>,

    #[sea_orm(nullable)]
    pub email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pet_store_customer::Entity")]
    PetStoreCustomers,
}

impl Related<super::pet_store_customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PetStoreCustomers.def()
    }
}

impl Related<super::pet_store::Entity> for Entity {
    fn to() -> RelationDef {
        super::pet_store_customer::Relation::PetStore.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pet_store_customer::Relation::Customer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
