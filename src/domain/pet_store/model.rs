//! Pet store domain entity

use crate::domain::customer::Customer;
use crate::domain::employee::Employee;
use crate::domain::upsert::Upsert;

/// Scalar fields a caller may set on a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetStoreFields {
    pub name: Option<String>,
    /// Unique across all stores
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
}

/// Save request for a store: no id creates, an id updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetStoreData {
    pub id: Option<i32>,
    pub fields: PetStoreFields,
}

impl PetStoreData {
    pub fn upsert(&self) -> Upsert<i32> {
        self.id.into()
    }
}

/// A persisted pet store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetStore {
    pub id: i32,
    pub name: Option<String>,
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
}

impl PetStore {
    /// Overwrites every scalar field, including the ones the caller left empty.
    pub fn apply(&mut self, fields: PetStoreFields) {
        self.name = fields.name;
        self.address = fields.address;
        self.city = fields.city;
        self.state = fields.state;
        self.zip = fields.zip;
        self.phone = fields.phone;
    }
}

/// A store together with its employees and associated customers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetStoreDetails {
    pub store: PetStore,
    pub employees: Vec<Employee>,
    pub customers: Vec<Customer>,
}
