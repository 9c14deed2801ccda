//! HTTP route handlers.
//!
//! Every response, preflight included, is marked `Cache-Control: no-store`.
//! CORS sits inside the request ID layer so preflight requests are logged
//! like any other.

pub mod health;
pub mod home;
pub mod query;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::cors::cors_layer;
use crate::middleware::request_id_layer;
use crate::state::AppState;

pub const QUERY_PATH: &str = "/api/query";
pub const HEALTH_PATH: &str = "/health";

/// Paths advertised by the root endpoint
pub const PUBLIC_ENDPOINTS: [&str; 1] = [QUERY_PATH];

/// Creates the Axum router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    Router::new()
        .route("/", get(home::index))
        .route(HEALTH_PATH, get(health::health))
        .route(QUERY_PATH, post(query::query))
        .with_state(state)
        .layer(cors)
        // Outside CORS so short-circuited preflight responses get it too
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
