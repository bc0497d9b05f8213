//! Reviews API routes

use axum::Router;
use database::mongodb::{Database, MongoDocumentStore, bson::doc};
use domain_reviews::{Review, ReviewService, handlers};
use mongodb::IndexModel;
use tracing::info;

use crate::state::AppState;

/// Create reviews router
pub fn router(state: &AppState) -> Router {
    handlers::router(ReviewService::new(MongoDocumentStore::new(&state.db)))
}

/// Reviews are always listed by `product_slug`
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    let store = MongoDocumentStore::<Review>::new(db);
    let index = IndexModel::builder()
        .keys(doc! { "product_slug": 1 })
        .build();

    store
        .collection()
        .create_index(index)
        .await
        .map_err(|e| eyre::eyre!("Failed to create review indexes: {}", e))?;
    info!("Review collection indexes created");
    Ok(())
}
