pub mod api_routes;

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::service::generation_service::GenerationService;
use api_routes::{diagram_types_handler, generate_handler, health_handler};

/// Permissive when `origins` is empty, otherwise restricted to the listed origins.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, ACCEPT]);
    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(allowed)
    }
}

pub fn router(service: GenerationService, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/api/generate", post(generate_handler))
        .route("/api/diagram-types", get(diagram_types_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(service)
}
