use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

/// Router fallback for unmatched paths.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new(
        ErrorCode::NotFound,
        "The requested resource was not found",
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Fallback for routes that exist under a different method.
pub async fn method_not_allowed() -> Response {
    let code = ErrorCode::MethodNotAllowed;
    let body = Json(ErrorResponse::new(code, code.default_message()));

    (StatusCode::METHOD_NOT_ALLOWED, body).into_response()
}
