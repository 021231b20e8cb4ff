//! Pet store DTOs
//!
//! Field names mirror the public JSON contract (`petStoreId`, `employeeFirstName`, ...).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{
    Customer, CustomerData, CustomerFields, Employee, EmployeeData, EmployeeFields,
    PetStoreData, PetStoreDetails, PetStoreFields,
};

// ── Stores ──────────────────────────────────────────────────────

/// Store create/update body. Nested `employees` and `customers` are ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetStoreRequest {
    /// Absent to create, present to update
    pub pet_store_id: Option<i32>,
    #[validate(length(max = 128))]
    pub pet_store_name: Option<String>,
    #[validate(length(min = 1, max = 128, message = "pet store address is required"))]
    pub pet_store_address: String,
    #[validate(length(max = 64))]
    pub pet_store_city: Option<String>,
    #[validate(length(max = 64))]
    pub pet_store_state: Option<String>,
    #[validate(length(max = 16))]
    pub pet_store_zip: Option<String>,
    #[validate(length(max = 32))]
    pub pet_store_phone: Option<String>,
}

impl From<PetStoreRequest> for PetStoreData {
    fn from(r: PetStoreRequest) -> Self {
        Self {
            id: r.pet_store_id,
            fields: PetStoreFields {
                name: r.pet_store_name,
                address: r.pet_store_address,
                city: r.pet_store_city,
                state: r.pet_store_state,
                zip: r.pet_store_zip,
                phone: r.pet_store_phone,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetStoreResponse {
    pub pet_store_id: i32,
    pub pet_store_name: Option<String>,
    pub pet_store_address: String,
    pub pet_store_city: Option<String>,
    pub pet_store_state: Option<String>,
    pub pet_store_zip: Option<String>,
    pub pet_store_phone: Option<String>,
    pub employees: Vec<EmployeeResponse>,
    pub customers: Vec<CustomerResponse>,
}

impl From<PetStoreDetails> for PetStoreResponse {
    fn from(d: PetStoreDetails) -> Self {
        Self {
            pet_store_id: d.store.id,
            pet_store_name: d.store.name,
            pet_store_address: d.store.address,
            pet_store_city: d.store.city,
            pet_store_state: d.store.state,
            pet_store_zip: d.store.zip,
            pet_store_phone: d.store.phone,
            employees: d.employees.into_iter().map(Into::into).collect(),
            customers: d.customers.into_iter().map(Into::into).collect(),
        }
    }
}

// ── Employees ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub employee_id: Option<i32>,
    #[validate(length(max = 64))]
    pub employee_first_name: Option<String>,
    #[validate(length(max = 64))]
    pub employee_last_name: Option<String>,
    #[validate(length(max = 32))]
    pub employee_phone: Option<String>,
    #[validate(length(max = 64))]
    pub employee_job_title: Option<String>,
}

impl From<EmployeeRequest> for EmployeeData {
    fn from(r: EmployeeRequest) -> Self {
        Self {
            id: r.employee_id,
            fields: EmployeeFields {
                first_name: r.employee_first_name,
                last_name: r.employee_last_name,
                phone: r.employee_phone,
                job_title: r.employee_job_title,
            },
        }
    }
}

/// Employee without its owning store
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub employee_id: i32,
    pub employee_first_name: Option<String>,
    pub employee_last_name: Option<String>,
    pub employee_phone: Option<String>,
    pub employee_job_title: Option<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            employee_id: e.id,
            employee_first_name: e.first_name,
            employee_last_name: e.last_name,
            employee_phone: e.phone,
            employee_job_title: e.job_title,
        }
    }
}

// ── Customers ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub customer_id: Option<i32>,
    #[validate(length(max = 64))]
    pub customer_first_name: Option<String>,
    #[validate(length(max = 64))]
    pub customer_last_name: Option<String>,
    #[validate(email(message = "customer email is not a valid address"))]
    pub customer_email: Option<String>,
}

impl From<CustomerRequest> for CustomerData {
    fn from(r: CustomerRequest) -> Self {
        Self {
            id: r.customer_id,
            fields: CustomerFields {
                first_name: r.customer_first_name,
                last_name: r.customer_last_name,
                email: r.customer_email,
            },
        }
    }
}

/// Customer without its stores
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub customer_id: i32,
    pub customer_first_name: Option<String>,
    pub customer_last_name: Option<String>,
    pub customer_email: Option<String>,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            customer_id: c.id,
            customer_first_name: c.first_name,
            customer_last_name: c.last_name,
            customer_email: c.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PetStore;

    #[test]
    fn store_request_reads_camel_case_and_ignores_nested_lists() {
        let req: PetStoreRequest = serde_json::from_value(serde_json::json!({
            "petStoreName": "Paws",
            "petStoreAddress": "1 Main St",
            "employees": [{"employeeFirstName": "Ann"}],
        }))
        .unwrap();

        let data = PetStoreData::from(req);
        assert_eq!(data.id, None);
        assert_eq!(data.fields.name.as_deref(), Some("Paws"));
        assert_eq!(data.fields.address, "1 Main St");
    }

    #[test]
    fn store_response_has_no_back_references() {
        let details = PetStoreDetails {
            store: PetStore {
                id: 1,
                name: None,
                address: "1 Main St".into(),
                city: None,
                state: None,
                zip: None,
                phone: None,
            },
            employees: vec![Employee {
                id: 2,
                pet_store_id: 1,
                first_name: Some("Ann".into()),
                last_name: None,
                phone: None,
                job_title: None,
            }],
            customers: vec![Customer {
                id: 3,
                first_name: Some("Bob".into()),
                last_name: None,
                email: None,
                pet_store_ids: vec![1],
            }],
        };

        let json = serde_json::to_value(PetStoreResponse::from(details)).unwrap();
        assert_eq!(json["petStoreId"], 1);
        assert_eq!(json["employees"][0]["employeeFirstName"], "Ann");
        assert!(json["employees"][0].get("petStoreId").is_none());
        assert_eq!(json["customers"][0]["customerId"], 3);
        assert!(json["customers"][0].get("petStores").is_none());
    }

    #[test]
    fn bad_customer_email_fails_validation() {
        let req = CustomerRequest {
            customer_id: None,
            customer_first_name: None,
            customer_last_name: None,
            customer_email: Some("not-an-email".into()),
        };
        assert!(req.validate().is_err());
    }
}
