//! Resource handlers and cross-cutting HTTP modules

pub mod health;
pub mod metrics;
pub mod pet_stores;
pub mod request_id;
