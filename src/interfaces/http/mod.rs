//! HTTP REST API interfaces
//!
//! - `common`: Response envelope, error mapping and the validated JSON extractor
//! - `modules`: Handlers and DTOs per resource, plus health, metrics and request ids
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc};
