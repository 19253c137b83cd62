//! Top-level router assembly and HTTP middleware.

use std::time::Duration;

use axum::{routing::get, Router};
use http::{HeaderValue, Method};
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::config::ServerConfig;

use super::health::{health, root};
use super::session::{session_routes, SessionAppState};

/// Build the complete application router with its middleware stack.
pub fn build_router(state: SessionAppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(session_routes())
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

/// CORS allow-list built from configured origins.
///
/// Origins that are not valid header values are skipped. A `*` entry opens
/// the API to any origin without credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(AllowOrigin::any())
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(methods)
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
