//! Health check endpoint for container orchestration.
//!
//! A liveness probe: returns 200 with `{"status": "healthy"}` whenever the
//! process can answer HTTP.

use axum::Json;
use serde::Serialize;

use crate::config::HEALTH_STATUS;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Health check handler.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: HEALTH_STATUS,
    })
}
