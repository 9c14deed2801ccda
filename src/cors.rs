//! Cross-origin access control for the browser frontend.
//!
//! Only origins on the configured allow-list may call the API, and they may do
//! so with credentials. Any method and any request header is accepted from an
//! allowed origin. A literal `*` is not valid next to
//! `Access-Control-Allow-Credentials: true`, so the preflight's requested
//! method and headers are mirrored back instead.

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// Build the CORS layer from configuration.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.origin_header_values()))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
