//! Employee domain entity

use crate::domain::upsert::Upsert;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeData {
    pub id: Option<i32>,
    pub fields: EmployeeFields,
}

impl EmployeeData {
    pub fn upsert(&self) -> Upsert<i32> {
        self.id.into()
    }
}

/// An employee, always owned by exactly one store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i32,
    pub pet_store_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
}

impl Employee {
    pub fn apply(&mut self, fields: EmployeeFields) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.phone = fields.phone;
        self.job_title = fields.job_title;
    }

    pub fn works_at(&self, pet_store_id: i32) -> bool {
        self.pet_store_id == pet_store_id
    }
}
