use crate::errors::AppError;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query-string counterpart of [`super::ValidatedJson`]. Unparseable parameters (unknown enum
/// values, non-integers) answer 400.
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state).await?;
        data.validate()?;
        Ok(ValidatedQuery(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, extract::Request, http::StatusCode, routing::get};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Params {
        min_temp: Option<i32>,
    }

    async fn handler(ValidatedQuery(params): ValidatedQuery<Params>) -> String {
        format!("{:?}", params.min_temp)
    }

    async fn get_status(uri: &str) -> StatusCode {
        let app = Router::new().route("/", get(handler));
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_absent_and_present_params() {
        assert_eq!(get_status("/").await, StatusCode::OK);
        assert_eq!(get_status("/?min_temp=-20").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_non_integer_is_bad_request() {
        assert_eq!(get_status("/?min_temp=cold").await, StatusCode::BAD_REQUEST);
    }
}
