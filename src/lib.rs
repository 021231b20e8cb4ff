//! # Pet Store Service
//!
//! REST backend for pet stores, their employees and their customers.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Entities, upsert commands and repository traits
//! - **application**: The pet store service (upsert, uniqueness and membership rules)
//! - **infrastructure**: SeaORM entities, migrations and repositories
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Errors and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmUnitOfWorkFactory};

// Re-export API router
pub use interfaces::http::create_api_router;
