use axum::Router;
use domain_sizing::handlers;

/// Create sizing router; the recommendation needs no state
pub fn router() -> Router {
    handlers::router()
}
