//! API integration tests, run in process against the memory store

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use hojavida_server::{
    api,
    config::{AppConfig, StorageBackend},
    models::{Role, UserClaims},
    repository::{memory::MemoryStore, Repository},
    services::Services,
    AppState,
};

const SECRET: &str = "test-secret";

fn app() -> Router {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = SECRET.to_string();
    config.storage.backend = StorageBackend::Memory;

    let repository = Repository::new(Arc::new(MemoryStore::new()));
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(Services::new(repository)),
    };
    api::create_router(state)
}

fn token(role: Role) -> String {
    UserClaims::new("tester", role, 1)
        .create_token(SECRET)
        .expect("Failed to create token")
}

/// Send a request and return status and JSON body (Null when empty)
async fn send(app: &Router, method: Method, uri: &str, role: Option<Role>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(role) = role {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token(role)));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("Failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/api/v1/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["storage"], "memory");
}

#[tokio::test]
async fn test_requires_token() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/equipment", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "NotAuthorized");
}

#[tokio::test]
async fn test_core_switch_lifecycle() {
    let app = app();
    let admin = Some(Role::Admin);

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/equipment",
        admin,
        Some(json!({"hostname": "SW-CORE-01", "device_kind": "switch", "org_unit": "unit B"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("No id in response").to_string();
    assert!(created["sheet_id"].as_str().unwrap().starts_with("HV-"));

    let (_, list) = send(&app, Method::GET, "/api/v1/equipment", admin, None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (_, found) = send(&app, Method::GET, "/api/v1/equipment?q=sw-core", admin, None).await;
    assert_eq!(found[0]["id"], id.as_str());

    let (_, none) = send(&app, Method::GET, "/api/v1/equipment?q=sw-core&device_kind=firewall", admin, None).await;
    assert!(none.as_array().unwrap().is_empty());

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/equipment/{}", id), admin, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) = send(&app, Method::GET, "/api/v1/equipment", admin, None).await;
    assert!(list.as_array().unwrap().is_empty());

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/equipment/{}", id), admin, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_validation_error() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/equipment",
        Some(Role::Admin),
        Some(json!({"hostname": "", "device_kind": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "MissingMandatoryField");
}

#[tokio::test]
async fn test_malformed_input_is_bad_value() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/equipment")
        .header(header::AUTHORIZATION, format!("Bearer {}", token(Role::Admin)))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"hostname\": "))
        .expect("Failed to build request");
    let response = app.clone().oneshot(request).await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("Failed to read body");
    let body: Value = serde_json::from_slice(&bytes).expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");
    assert_eq!(body["code"], 5);

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/api/v1/equipment/some-id/maintenance/first",
        Some(Role::Admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_lector_is_read_only() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/equipment",
        Some(Role::Lector),
        Some(json!({"hostname": "FW-1", "device_kind": "firewall"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, Method::GET, "/api/v1/equipment", Some(Role::Lector), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, "/api/v1/stats", Some(Role::Lector), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_and_maintenance() {
    let app = app();
    let admin = Some(Role::Admin);
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/v1/equipment",
        admin,
        Some(json!({"hostname": "SW-2", "device_kind": "switch", "org_unit": "unit B", "site": "RRHH"})),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["site"], "RRHH");

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/equipment/{}", id),
        admin,
        Some(json!({"hostname": "RT-2", "device_kind": "router", "org_unit": "unit B", "site": "RRHH"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["hostname"], "RT-2");
    assert_eq!(updated["site"], "");
    assert_eq!(updated["sheet_id"], created["sheet_id"]);
    assert_eq!(updated["created_at"], created["created_at"]);

    let uri = format!("/api/v1/equipment/{}/maintenance", id);
    let (status, with_entry) = send(&app, Method::POST, &uri, admin, Some(json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(with_entry["maintenance"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::DELETE, &format!("{}/3", uri), admin, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, without) = send(&app, Method::DELETE, &format!("{}/0", uri), admin, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(without["maintenance"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_site_options() {
    let app = app();
    let lector = Some(Role::Lector);
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/site-options?org_unit=unit%20B&device_kind=switch&site=RRHH",
        lector,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sites"], json!(["site-a", "site-b", "site-c", "RRHH"]));
    assert_eq!(body["site"], "RRHH");

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/v1/site-options?org_unit=unit%20B&device_kind=firewall&site=RRHH",
        lector,
        None,
    )
    .await;
    assert_eq!(body["site"], "");

    let (_, body) = send(&app, Method::GET, "/api/v1/site-options", lector, None).await;
    assert_eq!(body["sites"], json!([]));
}

#[tokio::test]
async fn test_import_report() {
    let app = app();
    let (status, report) = send(
        &app,
        Method::POST,
        "/api/v1/equipment/import",
        Some(Role::Admin),
        Some(json!({"records": [
            {"hostname": "AP-1", "device_kind": "access-point"},
            {"hostname": "", "device_kind": "router"}
        ]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["created"].as_array().unwrap().len(), 1);
    assert_eq!(report["skipped"][0]["row"], 1);

    let (_, stats) = send(&app, Method::GET, "/api/v1/stats", Some(Role::Admin), None).await;
    assert_eq!(stats["total"], 1);
}
