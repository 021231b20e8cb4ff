//! API Router with Swagger UI

use std::sync::Arc;

use axum::{middleware, routing::get, routing::post, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiResponse, MessageResponse};
use super::modules::health::{self, HealthState};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::pet_stores::{self, handlers, PetStoreState};
use super::modules::request_id::request_id_middleware;
use crate::application::PetStoreService;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::handlers::health_check,
        handlers::create_pet_store,
        handlers::update_pet_store,
        handlers::list_pet_stores,
        handlers::get_pet_store,
        handlers::delete_all_pet_stores,
        handlers::delete_pet_store,
        handlers::save_employee,
        handlers::save_customer,
    ),
    components(
        schemas(
            ApiResponse<String>,
            MessageResponse,
            health::HealthResponse,
            health::ComponentHealth,
            pet_stores::PetStoreRequest,
            pet_stores::PetStoreResponse,
            pet_stores::EmployeeRequest,
            pet_stores::EmployeeResponse,
            pet_stores::CustomerRequest,
            pet_stores::CustomerResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Pet Stores", description = "Pet store CRUD operations"),
        (name = "Employees", description = "Employees of a pet store"),
        (name = "Customers", description = "Customers associated with pet stores"),
    ),
    info(
        title = "Pet Store API",
        version = "1.0.0",
        description = "REST API for pet stores, their employees and their customers",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Base path the `#[utoipa::path]` annotations are written against.
const DOCUMENTED_BASE_PATH: &str = "/pet_store";

/// Moves documented pet store paths from the default base path onto `base`.
fn rebase_openapi(mut doc: utoipa::openapi::OpenApi, base: &str) -> utoipa::openapi::OpenApi {
    if base == DOCUMENTED_BASE_PATH {
        return doc;
    }
    let paths = std::mem::take(&mut doc.paths.paths);
    doc.paths.paths = paths
        .into_iter()
        .map(|(path, item)| match path.strip_prefix(DOCUMENTED_BASE_PATH) {
            Some(rest) if rest.starts_with('/') => (format!("{}{}", base, rest), item),
            _ => (path, item),
        })
        .collect();
    doc
}

/// Normalizes a configured base path to `/segment` form; empty means root.
fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Create the API router with all routes
///
/// Pet store routes live under `base_path`; `/health`, `/metrics` and the
/// Swagger UI are always served from the root.
pub fn create_api_router(
    service: Arc<PetStoreService>,
    db: DatabaseConnection,
    base_path: &str,
    metrics_handle: PrometheusHandle,
) -> Router {
    let pet_store_routes = Router::new()
        .route(
            "/pet_store",
            get(handlers::list_pet_stores)
                .post(handlers::create_pet_store)
                .delete(handlers::delete_all_pet_stores),
        )
        .route(
            "/pet_store/{id}",
            get(handlers::get_pet_store)
                .put(handlers::update_pet_store)
                .delete(handlers::delete_pet_store),
        )
        .route("/{store_id}/employee", post(handlers::save_employee))
        .route("/{store_id}/customer", post(handlers::save_customer))
        .with_state(PetStoreState { service });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState::new(db));

    let metrics_routes = Router::new()
        .route("/metrics", get(prometheus_metrics))
        .with_state(MetricsState {
            handle: metrics_handle,
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let base = normalize_base_path(base_path);
    let swagger_routes = SwaggerUi::new("/docs")
        .url("/api-doc/openapi.json", rebase_openapi(ApiDoc::openapi(), &base));

    let router = Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(metrics_routes);
    let router = if base.is_empty() {
        router.merge(pet_store_routes)
    } else {
        router.nest(&base, pet_store_routes)
    };

    router
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::infrastructure::database::test_support::migrated_db;
    use crate::infrastructure::SeaOrmUnitOfWorkFactory;

    async fn app_with_base(base_path: &str) -> Router {
        let db = migrated_db().await;
        let service = Arc::new(PetStoreService::new(Arc::new(
            SeaOrmUnitOfWorkFactory::new(db.clone()),
        )));
        let handle = PrometheusBuilder::new().build_recorder().handle();
        create_api_router(service, db, base_path, handle)
    }

    async fn app() -> Router {
        app_with_base("/pet_store").await
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(v) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&v).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(req).await.unwrap()
    }

    async fn json_body(resp: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn store_body(address: &str) -> Value {
        json!({
            "petStoreName": "Paws",
            "petStoreAddress": address,
            "petStoreCity": "Springfield",
            "petStoreState": "IL",
            "petStoreZip": "62701",
            "petStorePhone": "555-0100"
        })
    }

    async fn create_store(app: &Router, address: &str) -> i64 {
        let resp = send(app, "POST", "/pet_store/pet_store", Some(store_body(address))).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        json_body(resp).await["petStoreId"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn create_then_fetch_round_trips() {
        let app = app().await;
        let id = create_store(&app, "1 Main St").await;

        let resp = send(&app, "GET", &format!("/pet_store/pet_store/{}", id), None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["petStoreAddress"], "1 Main St");
        assert_eq!(body["petStoreName"], "Paws");
        assert_eq!(body["petStoreZip"], "62701");
        assert_eq!(body["employees"], json!([]));
        assert_eq!(body["customers"], json!([]));
    }

    #[tokio::test]
    async fn duplicate_address_is_conflict() {
        let app = app().await;
        create_store(&app, "1 Main St").await;

        let resp = send(&app, "POST", "/pet_store/pet_store", Some(store_body("1 Main St"))).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body = json_body(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["data"], Value::Null);
        assert!(body["error"].as_str().unwrap().contains("1 Main St"));
    }

    #[tokio::test]
    async fn put_to_unknown_id_is_not_found() {
        let app = app().await;
        let resp = send(&app, "PUT", "/pet_store/pet_store/99", Some(store_body("1 Main St"))).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn put_updates_store_at_path_id() {
        let app = app().await;
        let id = create_store(&app, "1 Main St").await;

        let mut body = store_body("9 Elm St");
        body["petStoreId"] = json!(12345);
        let resp = send(&app, "PUT", &format!("/pet_store/pet_store/{}", id), Some(body)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["petStoreId"], id);
        assert_eq!(body["petStoreAddress"], "9 Elm St");
    }

    #[tokio::test]
    async fn delete_all_is_method_not_allowed() {
        let app = app().await;
        let resp = send(&app, "DELETE", "/pet_store/pet_store", None).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        create_store(&app, "1 Main St").await;
        let resp = send(&app, "DELETE", "/pet_store/pet_store", None).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = json_body(resp).await;
        assert_eq!(body["success"], false);
        assert!(body.get("message").is_none());
        assert!(body["error"].as_str().unwrap().contains("not allowed"));

        let resp = send(&app, "GET", "/pet_store/pet_store", None).await;
        assert_eq!(json_body(resp).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_by_id_returns_message_and_removes_store() {
        let app = app().await;
        let id = create_store(&app, "1 Main St").await;

        let resp = send(&app, "DELETE", &format!("/pet_store/pet_store/{}", id), None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            json_body(resp).await,
            json!({"message": format!("Deleting of Pet Store with ID={} was successful", id)})
        );

        let resp = send(&app, "GET", "/pet_store/pet_store", None).await;
        assert_eq!(json_body(resp).await, json!([]));

        let resp = send(&app, "DELETE", &format!("/pet_store/pet_store/{}", id), None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn employee_is_created_under_store() {
        let app = app().await;
        let id = create_store(&app, "1 Main St").await;

        let resp = send(
            &app,
            "POST",
            &format!("/pet_store/{}/employee", id),
            Some(json!({"employeeFirstName": "Ann", "employeeJobTitle": "Groomer"})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let employee = json_body(resp).await;
        assert_eq!(employee["employeeFirstName"], "Ann");
        assert!(employee["employeeId"].is_i64());

        let resp = send(&app, "GET", &format!("/pet_store/pet_store/{}", id), None).await;
        let store = json_body(resp).await;
        assert_eq!(store["employees"][0]["employeeJobTitle"], "Groomer");
    }

    #[tokio::test]
    async fn customer_of_other_store_is_bad_request() {
        let app = app().await;
        let a = create_store(&app, "1 Main St").await;
        let b = create_store(&app, "2 Oak Ave").await;

        let resp = send(
            &app,
            "POST",
            &format!("/pet_store/{}/customer", a),
            Some(json!({"customerFirstName": "Bob", "customerEmail": "bob@example.com"})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let customer_id = json_body(resp).await["customerId"].as_i64().unwrap();

        let resp = send(
            &app,
            "POST",
            &format!("/pet_store/{}/customer", b),
            Some(json!({"customerId": customer_id, "customerFirstName": "Bob"})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn invalid_bodies_are_rejected() {
        let app = app().await;

        let resp = send(&app, "POST", "/pet_store/pet_store", Some(store_body(""))).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = Request::builder()
            .method("POST")
            .uri("/pet_store/pet_store")
            .header("content-type", "application/json")
            .body(Body::from("{"))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn routes_follow_configured_base_path() {
        let app = app_with_base("/").await;
        let resp = send(&app, "POST", "/pet_store", Some(store_body("1 Main St"))).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = send(&app, "GET", "/pet_store/pet_store", None).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn ops_endpoints_and_request_id() {
        let app = app().await;

        let resp = send(&app, "GET", "/health", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key("x-request-id"));
        assert_eq!(json_body(resp).await["database"]["status"], "ok");

        let resp = send(&app, "GET", "/metrics", None).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = send(&app, "GET", "/api-doc/openapi.json", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let doc = json_body(resp).await;
        assert!(doc["paths"]["/pet_store/pet_store/{id}"].is_object());
    }

    #[tokio::test]
    async fn openapi_paths_follow_configured_base_path() {
        let app = app_with_base("/shop").await;

        let resp = send(&app, "GET", "/api-doc/openapi.json", None).await;
        let doc = json_body(resp).await;
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/shop/pet_store/{id}"));
        assert!(paths.contains_key("/shop/{store_id}/customer"));
        assert!(paths.contains_key("/health"));
        assert!(!paths.contains_key("/pet_store/pet_store"));

        let resp = send(&app, "GET", "/shop/pet_store", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn root_base_path_strips_documented_prefix() {
        let doc = rebase_openapi(ApiDoc::openapi(), "");
        assert!(doc.paths.paths.contains_key("/pet_store/{id}"));
        assert!(doc.paths.paths.contains_key("/{store_id}/employee"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn base_path_is_normalized() {
        assert_eq!(normalize_base_path("pet_store/"), "/pet_store");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path(""), "");
    }
}
