//! HTTP handlers for product reviews

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse},
};
use database::mongodb::DocumentStore;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ReviewResult;
use crate::models::{Review, ReviewList};
use crate::service::ReviewService;

#[derive(OpenApi)]
#[openapi(
    paths(list_reviews, create_review),
    components(
        schemas(Review, ReviewList),
        responses(BadRequestValidationResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Reviews", description = "Customer reviews keyed by jacket slug")
    )
)]
pub struct ApiDoc;

/// Create the reviews router
pub fn router<S: DocumentStore<Review> + 'static>(service: ReviewService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_review))
        .route("/{product_slug}", get(list_reviews))
        .with_state(shared_service)
}

/// List reviews for a jacket
#[utoipa::path(
    get,
    path = "/{product_slug}",
    tag = "Reviews",
    params(
        ("product_slug" = String, Path, description = "Slug of the reviewed jacket")
    ),
    responses(
        (status = 200, description = "Reviews for the jacket (at most 50)", body = ReviewList),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_reviews<S: DocumentStore<Review>>(
    State(service): State<Arc<ReviewService<S>>>,
    Path(product_slug): Path<String>,
) -> ReviewResult<Json<ReviewList>> {
    let items = service.list_reviews(&product_slug).await?;
    Ok(Json(ReviewList { items }))
}

/// Submit a review
#[utoipa::path(
    post,
    path = "",
    tag = "Reviews",
    request_body = Review,
    responses(
        (status = 201, description = "Stored review with `_id`, `created_at` and `updated_at`", body = Review),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_review<S: DocumentStore<Review>>(
    State(service): State<Arc<ReviewService<S>>>,
    ValidatedJson(review): ValidatedJson<Review>,
) -> ReviewResult<impl IntoResponse> {
    let stored = service.create_review(review).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}
