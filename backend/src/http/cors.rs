//! CORS layer construction.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};

use crate::config::ServerConfig;

/// Build the CORS layer for the configured origins.
///
/// `*` allows any origin without credentials. An explicit list allows only
/// those origins, with credentials, mirroring the requested method and
/// headers.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allow_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
