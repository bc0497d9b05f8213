//! HTTP handler for size recommendations

use axum::{Json, Router, routing::post};
use axum_helpers::{ValidatedJson, errors::responses::BadRequestValidationResponse};
use utoipa::OpenApi;

use crate::models::{Build, Size, SizeInput, SizeRecommendation};
use crate::recommend::recommend_size;

#[derive(OpenApi)]
#[openapi(
    paths(recommend),
    components(
        schemas(SizeInput, SizeRecommendation, Build, Size),
        responses(BadRequestValidationResponse)
    ),
    tags(
        (name = "Sizing", description = "Size recommendation")
    )
)]
pub struct ApiDoc;

/// Create the sizing router
pub fn router() -> Router {
    Router::new().route("/recommend", post(recommend))
}

/// Recommend a jacket size from body metrics
#[utoipa::path(
    post,
    path = "/recommend",
    tag = "Sizing",
    request_body = SizeInput,
    responses(
        (status = 200, description = "Recommended size", body = SizeRecommendation),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn recommend(ValidatedJson(input): ValidatedJson<SizeInput>) -> Json<SizeRecommendation> {
    let recommended = recommend_size(input.height_cm, input.weight_kg, input.build);
    tracing::debug!(
        height_cm = input.height_cm,
        weight_kg = input.weight_kg,
        build = %input.build,
        %recommended,
        "Size recommended"
    );
    Json(SizeRecommendation { recommended })
}
