// crates/backend-lib/src/handlers/mod.rs

//! HTTP handlers.

pub mod auth;
pub mod catalog;

use axum::Json;

use crate::messages::HealthResponse;

/// Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "pong".to_string(),
    })
}
