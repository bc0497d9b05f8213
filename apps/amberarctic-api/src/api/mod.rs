//! API routes module

pub mod health;
pub mod jackets;
pub mod reviews;
pub mod sizing;

use axum::Router;
use axum_helpers::health_router;

use crate::state::AppState;

/// Create all API routes, mounted at the root by `axum_helpers::create_router`
pub fn routes(state: &AppState) -> Router {
    mount(
        jackets::router(state),
        reviews::router(state),
        health::router(state.clone()).merge(health_router(state.config.app)),
    )
}

/// Nest the domain routers under their prefixes next to the status routes
fn mount(jackets: Router, reviews: Router, status: Router) -> Router {
    Router::new()
        .nest("/jackets", jackets)
        .nest("/reviews", reviews)
        .nest("/size", sizing::router())
        .merge(status)
}
