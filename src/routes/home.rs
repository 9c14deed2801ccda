//! Service metadata at the root path.

use axum::Json;
use serde::Serialize;

use crate::config::{SERVICE_NAME, SERVICE_STATUS};

use super::PUBLIC_ENDPOINTS;

/// Root endpoint body: service name, status, and the API paths on offer.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub status: &'static str,
    pub endpoints: &'static [&'static str],
}

pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: SERVICE_NAME,
        status: SERVICE_STATUS,
        endpoints: &PUBLIC_ENDPOINTS,
    })
}
