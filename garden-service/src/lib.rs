pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;
pub mod utils;

use service_core::axum::{
    body::Body,
    middleware::from_fn,
    routing::{get, post},
    Json, Router,
};
use service_core::middleware::{
    cors::permissive_cors,
    metrics::metrics_middleware,
    security_headers::security_headers_middleware,
    tracing::{request_id_middleware, request_span},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GardenConfig;
use crate::services::DocumentStore;

#[derive(OpenApi)]
#[openapi(
    info(title = "Forevergreen Homes and Gardens API"),
    paths(
        handlers::root::read_root,
        handlers::diagnostics::test_database,
        handlers::contact::submit_contact,
        handlers::catalog::get_services,
        handlers::catalog::get_testimonials,
    ),
    components(
        schemas(
            dtos::ContactInquiry,
            dtos::ContactResponse,
            dtos::ErrorResponse,
            dtos::StatusMessage,
            dtos::DiagnosticsReport,
            dtos::ServiceOffering,
            dtos::ServicesResponse,
            dtos::Testimonial,
            dtos::TestimonialsResponse,
        )
    ),
    tags(
        (name = "Contact", description = "Contact form submissions"),
        (name = "Content", description = "Static website content"),
        (name = "Observability", description = "Service health and diagnostics"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: GardenConfig,
    /// `None` when no database is configured.
    pub store: Option<Arc<dyn DocumentStore>>,
}

impl AppState {
    pub fn new(config: GardenConfig, store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self { config, store }
    }
}

pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::read_root))
        .route("/test", get(handlers::test_database))
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/services", get(handlers::get_services))
        .route("/api/testimonials", get(handlers::get_testimonials))
        .route("/metrics", get(handlers::metrics::metrics))
        .with_state(state.clone());

    if state.config.swagger_enabled {
        app = app.merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()));
    } else {
        app = app.route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }));
    }

    app.layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(request_span::<Body>))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(permissive_cors())
}
