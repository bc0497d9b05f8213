//! HTTP handlers for the jacket catalog

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use axum_helpers::{
    ValidatedQuery,
    errors::responses::{BadRequestQueryResponse, InternalServerErrorResponse, NotFoundResponse},
};
use database::mongodb::{DocumentStore, Stored};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::JacketResult;
use crate::models::{Activity, Gender, Jacket, JacketFilter, JacketList};
use crate::service::JacketService;

#[derive(OpenApi)]
#[openapi(
    paths(list_jackets, get_jacket),
    components(
        schemas(Jacket, JacketFilter, JacketList, Gender, Activity),
        responses(NotFoundResponse, BadRequestQueryResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Jackets", description = "Jacket catalog")
    )
)]
pub struct ApiDoc;

/// Create the jackets router
pub fn router<S: DocumentStore<Jacket> + 'static>(service: JacketService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_jackets))
        .route("/{slug}", get(get_jacket))
        .with_state(shared_service)
}

/// List jackets, optionally filtered by gender, activity and temperature range
#[utoipa::path(
    get,
    path = "",
    tag = "Jackets",
    params(JacketFilter),
    responses(
        (status = 200, description = "Matching jackets (at most 100)", body = JacketList),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_jackets<S: DocumentStore<Jacket>>(
    State(service): State<Arc<JacketService<S>>>,
    ValidatedQuery(filter): ValidatedQuery<JacketFilter>,
) -> JacketResult<Json<JacketList>> {
    let items = service.list_jackets(&filter).await?;
    Ok(Json(JacketList { items }))
}

/// Get a jacket by slug
#[utoipa::path(
    get,
    path = "/{slug}",
    tag = "Jackets",
    params(
        ("slug" = String, Path, description = "Jacket slug")
    ),
    responses(
        (status = 200, description = "Jacket with `_id`, `created_at` and `updated_at`", body = Jacket),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_jacket<S: DocumentStore<Jacket>>(
    State(service): State<Arc<JacketService<S>>>,
    Path(slug): Path<String>,
) -> JacketResult<Json<Stored<Jacket>>> {
    let jacket = service.get_by_slug(&slug).await?;
    Ok(Json(jacket))
}
