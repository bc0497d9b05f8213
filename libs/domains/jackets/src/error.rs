use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::MongoError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum JacketError {
    #[error("Jacket '{0}' not found")]
    NotFound(String),

    #[error("Invalid jacket: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Store error: {0}")]
    Store(#[from] MongoError),
}

pub type JacketResult<T> = Result<T, JacketError>;

impl From<JacketError> for AppError {
    fn from(err: JacketError) -> Self {
        match err {
            JacketError::NotFound(slug) => AppError::NotFound(format!("Jacket '{}' not found", slug)),
            JacketError::Validation(errors) => AppError::ValidationError(errors),
            JacketError::Store(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for JacketError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
