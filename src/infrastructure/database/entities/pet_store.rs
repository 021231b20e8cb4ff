//! PetStore entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pet_stores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(nullable)]
    pub name: Option<String>,

    /// Unique across all stores
    #[sea_orm(unique)]
    pub address: String,

    #[sea_orm(nullable)]
    pub city: Option<String>,

    #[sea_orm(nullable)]
    pub state: Option<String>,

    #[sea_orm(nullable)]
    pub zip: Option<String>,

    #[sea_orm(nullable)]
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee::Entity")]
    Employees,
    #[sea_orm(has_many = "super::pet_store_customer::Entity")]
    PetStoreCustomers,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl Related<super::pet_store_customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PetStoreCustomers.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        super::pet_store_customer::Relation::Customer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pet_store_customer::Relation::PetStore.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
