//! Shared HTTP building blocks

pub mod error;
pub mod response;
pub mod validated_json;

pub use error::{domain_error, ApiError};
pub use response::{ApiResponse, MessageResponse};
pub use validated_json::ValidatedJson;
