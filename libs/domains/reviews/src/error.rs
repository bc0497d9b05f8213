use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::MongoError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Invalid review: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Store error: {0}")]
    Store(#[from] MongoError),
}

pub type ReviewResult<T> = Result<T, ReviewError>;

impl From<ReviewError> for AppError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::Validation(errors) => AppError::ValidationError(errors),
            ReviewError::Store(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
