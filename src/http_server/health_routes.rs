//! Liveness HTTP Routes
//!
//! `/` and `/api` answer with a running message for the dashboard front end;
//! `/health` reports status and version for probes.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

pub const RUNNING_MESSAGE: &str = "Service Dashboard API is running";

/// Liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create liveness routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/api", get(root_handler))
        .route("/health", get(health_handler))
}

async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: RUNNING_MESSAGE.to_string(),
    })
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
