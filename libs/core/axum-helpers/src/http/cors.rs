use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// CORS restricted to a single front-end origin, with credentials.
///
/// Allows GET, POST and OPTIONS with `Content-Type`, `Authorization` and `Accept` headers, and
/// lets browsers cache the preflight for an hour.
pub fn create_cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Any origin, any method, any header, no credentials.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
