//! Request IDs for correlating logs across the frontend and this service.
//!
//! A caller-supplied `x-request-id` is kept when it is a valid UUID, so the
//! browser client can tie its own logs to ours; anything else is replaced
//! with a fresh UUID v4. The id is echoed on the response, stored in request
//! extensions, and recorded on a `request` span wrapping the whole request.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the request id in both directions
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Request ID, stored in request extensions for handlers that want it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Reuse the caller's id if it parses as a UUID, otherwise generate one.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(&X_REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok())
            .map(RequestId)
            .unwrap_or_else(|| RequestId(Uuid::new_v4()))
    }

    fn header_value(&self) -> HeaderValue {
        // A hyphenated UUID is always a valid header value
        HeaderValue::from_str(&self.0.hyphenated().to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("invalid"))
    }
}

/// Middleware that assigns a request ID and creates a request span.
///
/// Must be the outermost layer so the span also covers CORS preflight
/// handling.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_headers(request.headers());
    let origin = request
        .headers()
        .get(axum::http::header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id.0,
        method = %request.method(),
        path = %request.uri().path(),
        origin = %origin,
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();
    request.extensions_mut().insert(request_id);

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        let status = response.status().as_u16();
        if response.status().is_client_error() {
            tracing::warn!(status, duration_ms, "Request rejected");
        } else {
            tracing::info!(status, duration_ms, "Request completed");
        }

        response
            .headers_mut()
            .insert(X_REQUEST_ID.clone(), request_id.header_value());
        response
    }
    .instrument(span)
    .await
}
