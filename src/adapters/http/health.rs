//! Liveness endpoints.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET / - Service banner
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(RootResponse {
            message: "Bankroll Tracker API is running",
        }),
    )
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "healthy" }))
}
