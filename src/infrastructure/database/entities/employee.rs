//! Employee entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Owning store
    pub pet_store_id: i32,

    #[sea_orm(nullable)]
    pub first_name: Option<String>,

    #[sea_orm(nullable)]
    pub last_name: Option<String>,

    #[sea_orm(nullable)]
    pub phone: Option<String>,

    #[sea_orm(nullable)]
    pub job_title: Option<String>,
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
}

impl Related<super::pet_store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PetStore.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
