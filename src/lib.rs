//! HealthMate: demo backend for a health assistant frontend.
//!
//! Serves canned answers to free-text health questions picked by keyword
//! matching, plus root metadata and a liveness probe. Stands in for a real
//! inference service.

pub mod config;
pub mod cors;
pub mod error;
pub mod http;
pub mod middleware;
pub mod responder;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use responder::{KeywordEntry, KeywordTable, FALLBACK_RESPONSE};
pub use routes::create_router;
pub use state::AppState;
