//! Jackets API routes, indexes and startup seeding

use axum::Router;
use database::mongodb::{Database, MongoDocumentStore, bson::doc};
use domain_jackets::{Jacket, JacketService, handlers, sample_jackets};
use mongodb::{IndexModel, options::IndexOptions};
use tracing::info;

use crate::state::AppState;

fn service(db: &Database) -> JacketService<MongoDocumentStore<Jacket>> {
    JacketService::new(MongoDocumentStore::new(db))
}

/// Create jackets router
pub fn router(state: &AppState) -> Router {
    handlers::router(service(&state.db))
}

/// Unique index on `slug`, which lookups and seeding rely on
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    let store = MongoDocumentStore::<Jacket>::new(db);
    let index = IndexModel::builder()
        .keys(doc! { "slug": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();

    store
        .collection()
        .create_index(index)
        .await
        .map_err(|e| eyre::eyre!("Failed to create jacket indexes: {}", e))?;
    info!("Jacket collection indexes created");
    Ok(())
}

/// Insert the sample catalog when the collection holds no jacket yet
pub async fn seed(db: &Database) -> eyre::Result<()> {
    let inserted = service(db)
        .seed_if_empty(sample_jackets())
        .await
        .map_err(|e| eyre::eyre!("Failed to seed jackets: {}", e))?;
    if inserted > 0 {
        info!(inserted, "Sample jackets inserted");
    }
    Ok(())
}
