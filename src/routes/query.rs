//! Health query endpoint.
//!
//! Accepts `{"prompt": "..."}` and answers `{"response": "..."}` from the
//! keyword table. Every input problem, from an unparseable body to a blank
//! prompt, is a 400 with a `{"detail": ...}` body.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// Absent and `null` both deserialize to `None` and are rejected as empty
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub response: String,
}

/// Query handler.
pub async fn query(
    State(state): State<AppState>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, AppError> {
    let Json(request) = payload?;
    let response = state.responder.answer(request.prompt.as_deref())?;

    Ok(Json(QueryResponse {
        response: response.to_string(),
    }))
}
