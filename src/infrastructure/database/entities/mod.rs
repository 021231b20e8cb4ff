//! Database entities module

pub mod customer;
pub mod employee;
pub mod pet_store;
pub mod pet_store_customer;

pub use customer::Entity as Customer;
pub use employee::Entity as Employee;
pub use pet_store::Entity as PetStore;
pub use pet_store_customer::Entity as PetStoreCustomer;
