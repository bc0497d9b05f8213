//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::health::{self, Diagnostics, StatusMessage};

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Amberarctic API",
        version = "0.1.0",
        description = "Heated jacket catalog, reviews and size recommendations",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(health::root, health::diagnostics),
    components(schemas(StatusMessage, Diagnostics)),
    nest(
        (path = "/jackets", api = domain_jackets::ApiDoc),
        (path = "/reviews", api = domain_reviews::ApiDoc),
        (path = "/size", api = domain_sizing::ApiDoc)
    ),
    tags(
        (name = "Service", description = "Service status and diagnostics")
    )
)]
pub struct ApiDoc;
