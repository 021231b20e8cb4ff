//! Customer domain entity

use crate::domain::upsert::Upsert;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerData {
    pub id: Option<i32>,
    pub fields: CustomerFields,
}

impl CustomerData {
    pub fn upsert(&self) -> Upsert<i32> {
        self.id.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Ids of every store the customer is associated with
    pub pet_store_ids: Vec<i32>,
}

impl Customer {
    pub fn apply(&mut self, fields: CustomerFields) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.email = fields.email;
    }

    /// True when any associated store has the given id, regardless of order.
    pub fn is_member_of(&self, pet_store_id: i32) -> bool {
        self.pet_store_ids.contains(&pet_store_id)
    }
}
