#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use garden_service::config::{DatabaseConfig, GardenConfig};
use garden_service::services::{DocumentStore, MockDocumentStore};
use garden_service::{build_router, AppState};
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::util::ServiceExt;

pub fn test_config(database: DatabaseConfig) -> GardenConfig {
    GardenConfig {
        common: CoreConfig { port: 0 },
        service_name: "garden-service-test".to_string(),
        log_level: "error".to_string(),
        otlp_endpoint: None,
        database,
        swagger_enabled: true,
    }
}

pub fn configured_database() -> DatabaseConfig {
    DatabaseConfig {
        url: Some("mongodb://localhost:27017".to_string()),
        name: Some("garden_test".to_string()),
    }
}

/// Router backed by `store`, with the database settings marked as configured.
pub fn router_with_store(store: Arc<MockDocumentStore>) -> Router {
    let store: Arc<dyn DocumentStore> = store;
    build_router(AppState::new(
        test_config(configured_database()),
        Some(store),
    ))
}

/// Router without Swagger UI; the OpenAPI document stays available.
pub fn router_without_swagger() -> Router {
    let mut config = test_config(DatabaseConfig::default());
    config.swagger_enabled = false;
    build_router(AppState::new(config, None))
}

/// Router with no database at all.
pub fn router_without_store() -> Router {
    build_router(AppState::new(test_config(DatabaseConfig::default()), None))
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

pub async fn read_json(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
