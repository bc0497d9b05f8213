//! Jacket Service - catalog queries and seeding

use database::mongodb::{DocumentStore, Stored};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{JacketError, JacketResult};
use crate::filter::{build_filter, slug_filter};
use crate::models::{Jacket, JacketFilter};

/// Maximum number of jackets a listing returns
pub const LIST_LIMIT: i64 = 100;

pub struct JacketService<S: DocumentStore<Jacket>> {
    store: Arc<S>,
}

impl<S: DocumentStore<Jacket>> JacketService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Jackets matching every given clause, in store order, capped at [`LIST_LIMIT`].
    #[instrument(skip(self))]
    pub async fn list_jackets(&self, filter: &JacketFilter) -> JacketResult<Vec<Stored<Jacket>>> {
        let jackets = self
            .store
            .query(build_filter(filter), Some(LIST_LIMIT))
            .await?;
        Ok(jackets)
    }

    #[instrument(skip(self))]
    pub async fn get_by_slug(&self, slug: &str) -> JacketResult<Stored<Jacket>> {
        self.store
            .query(slug_filter(slug), Some(1))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| JacketError::NotFound(slug.to_string()))
    }

    #[instrument(skip(self, jacket), fields(slug = %jacket.slug))]
    pub async fn create_jacket(&self, jacket: Jacket) -> JacketResult<Stored<Jacket>> {
        jacket.validate()?;

        let stored = self.store.create(jacket).await?;

        tracing::info!(id = %stored.id, "Jacket created");
        Ok(stored)
    }

    /// Insert `samples` only when the catalog holds no jacket at all. Returns how many were
    /// inserted.
    #[instrument(skip(self, samples), fields(samples = samples.len()))]
    pub async fn seed_if_empty(&self, samples: Vec<Jacket>) -> JacketResult<usize> {
        let existing = self.store.query(Default::default(), Some(1)).await?;
        if !existing.is_empty() {
            tracing::debug!("Catalog already populated, skipping seed");
            return Ok(0);
        }

        let mut inserted = 0;
        for jacket in samples {
            self.create_jacket(jacket).await?;
            inserted += 1;
        }

        tracing::info!(inserted, "Seeded jacket catalog");
        Ok(inserted)
    }
}
