//! Mapping of domain errors onto HTTP responses

use axum::http::StatusCode;
use axum::Json;
use tracing::{error, warn};

use super::ApiResponse;
use crate::shared::errors::DomainError;

/// Error half of every handler result.
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::DuplicateKey(_) => StatusCode::CONFLICT,
        DomainError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        DomainError::UnsupportedOperation(_) => StatusCode::METHOD_NOT_ALLOWED,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Converts a service failure into a status code and error envelope.
///
/// Use with `map_err`: `service.call().await.map_err(domain_error)?`
pub fn domain_error(err: DomainError) -> ApiError {
    let status = status_for(&err);
    if err.is_client_error() {
        warn!(status = status.as_u16(), error = %err, "Request rejected");
    } else {
        error!(error = %err, "Request failed");
    }
    (status, Json(ApiResponse::error(err.to_string())))
}
