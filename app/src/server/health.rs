//! Health check endpoint.

use axum::Json;
use serde::Serialize;

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the process is serving
    pub status: &'static str,
}

/// Liveness probe. No dependencies are checked: the process either serves
/// or it doesn't.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
