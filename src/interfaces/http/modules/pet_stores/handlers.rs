//! Pet store REST API handlers
//!
//! Documented paths use the default `/pet_store` base path; the router
//! rewrites them when another base path is configured.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::dto::{
    CustomerRequest, CustomerResponse, EmployeeRequest, EmployeeResponse, PetStoreRequest,
    PetStoreResponse,
};
use crate::application::PetStoreService;
use crate::domain::PetStoreData;
use crate::interfaces::http::common::{
    domain_error, ApiError, ApiResponse, MessageResponse, ValidatedJson,
};

#[derive(Clone)]
pub struct PetStoreState {
    pub service: Arc<PetStoreService>,
}

#[utoipa::path(
    post,
    path = "/pet_store/pet_store",
    tag = "Pet Stores",
    request_body = PetStoreRequest,
    responses(
        (status = 201, description = "Store saved", body = PetStoreResponse),
        (status = 404, description = "Unknown petStoreId", body = ApiResponse<String>),
        (status = 409, description = "Address already taken", body = ApiResponse<String>),
        (status = 422, description = "Invalid body", body = ApiResponse<String>)
    )
)]
pub async fn create_pet_store(
    State(state): State<PetStoreState>,
    ValidatedJson(req): ValidatedJson<PetStoreRequest>,
) -> Result<(StatusCode, Json<PetStoreResponse>), ApiError> {
    info!(address = %req.pet_store_address, "Creating pet store");
    let details = state
        .service
        .save_pet_store(req.into())
        .await
        .map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(details.into())))
}

#[utoipa::path(
    put,
    path = "/pet_store/pet_store/{id}",
    tag = "Pet Stores",
    params(("id" = i32, Path, description = "Pet store ID")),
    request_body = PetStoreRequest,
    responses(
        (status = 200, description = "Store updated", body = PetStoreResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 409, description = "Address already taken", body = ApiResponse<String>)
    )
)]
pub async fn update_pet_store(
    State(state): State<PetStoreState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<PetStoreRequest>,
) -> Result<Json<PetStoreResponse>, ApiError> {
    info!(pet_store_id = id, "Updating pet store");
    let mut data = PetStoreData::from(req);
    data.id = Some(id);
    let details = state
        .service
        .save_pet_store(data)
        .await
        .map_err(domain_error)?;
    Ok(Json(details.into()))
}

#[utoipa::path(
    get,
    path = "/pet_store/pet_store",
    tag = "Pet Stores",
    responses(
        (status = 200, description = "All stores ordered by id", body = Vec<PetStoreResponse>)
    )
)]
pub async fn list_pet_stores(
    State(state): State<PetStoreState>,
) -> Result<Json<Vec<PetStoreResponse>>, ApiError> {
    info!("Retrieving all pet stores");
    let stores = state
        .service
        .retrieve_all_pet_stores()
        .await
        .map_err(domain_error)?;
    Ok(Json(stores.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/pet_store/pet_store/{id}",
    tag = "Pet Stores",
    params(("id" = i32, Path, description = "Pet store ID")),
    responses(
        (status = 200, description = "Store details", body = PetStoreResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_pet_store(
    State(state): State<PetStoreState>,
    Path(id): Path<i32>,
) -> Result<Json<PetStoreResponse>, ApiError> {
    info!(pet_store_id = id, "Retrieving pet store");
    let details = state
        .service
        .retrieve_pet_store_by_id(id)
        .await
        .map_err(domain_error)?;
    Ok(Json(details.into()))
}

#[utoipa::path(
    delete,
    path = "/pet_store/pet_store",
    tag = "Pet Stores",
    responses(
        (status = 405, description = "Bulk deletion is not allowed", body = ApiResponse<String>)
    )
)]
pub async fn delete_all_pet_stores(State(state): State<PetStoreState>) -> ApiError {
    info!("Deleting all pet stores");
    match state.service.delete_all_pet_stores().await {
        Ok(never) => match never {},
        Err(e) => domain_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/pet_store/pet_store/{id}",
    tag = "Pet Stores",
    params(("id" = i32, Path, description = "Pet store ID")),
    responses(
        (status = 200, description = "Store deleted", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_pet_store(
    State(state): State<PetStoreState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!(pet_store_id = id, "Deleting pet store");
    state
        .service
        .delete_pet_store_by_id(id)
        .await
        .map_err(domain_error)?;
    Ok(Json(MessageResponse::new(format!(
        "Deleting of Pet Store with ID={} was successful",
        id
    ))))
}

#[utoipa::path(
    post,
    path = "/pet_store/{store_id}/employee",
    tag = "Employees",
    params(("store_id" = i32, Path, description = "Owning pet store ID")),
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee saved", body = EmployeeResponse),
        (status = 400, description = "Employee works at another store", body = ApiResponse<String>),
        (status = 404, description = "Store or employee not found", body = ApiResponse<String>)
    )
)]
pub async fn save_employee(
    State(state): State<PetStoreState>,
    Path(store_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<EmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), ApiError> {
    info!(pet_store_id = store_id, employee_id = ?req.employee_id, "Saving employee");
    let employee = state
        .service
        .save_employee(store_id, req.into())
        .await
        .map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(employee.into())))
}

#[utoipa::path(
    post,
    path = "/pet_store/{store_id}/customer",
    tag = "Customers",
    params(("store_id" = i32, Path, description = "Pet store ID")),
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Customer saved and linked", body = CustomerResponse),
        (status = 400, description = "Customer is not a member of the store", body = ApiResponse<String>),
        (status = 404, description = "Store or customer not found", body = ApiResponse<String>)
    )
)]
pub async fn save_customer(
    State(state): State<PetStoreState>,
    Path(store_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<CustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    info!(pet_store_id = store_id, customer_id = ?req.customer_id, "Saving customer");
    let customer = state
        .service
        .save_customer(store_id, req.into())
        .await
        .map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(customer.into())))
}
