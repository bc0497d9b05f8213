//! Review Service

use database::mongodb::{DocumentStore, Stored, bson::doc};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::ReviewResult;
use crate::models::Review;

pub struct ReviewService<S: DocumentStore<Review>> {
    store: Arc<S>,
}

impl<S: DocumentStore<Review>> ReviewService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Reviews for one jacket in store order, up to the store's default cap.
    #[instrument(skip(self))]
    pub async fn list_reviews(&self, product_slug: &str) -> ReviewResult<Vec<Stored<Review>>> {
        let reviews = self
            .store
            .query(doc! { "product_slug": product_slug }, None)
            .await?;
        Ok(reviews)
    }

    #[instrument(skip(self, review), fields(product_slug = %review.product_slug, rating = review.rating))]
    pub async fn create_review(&self, review: Review) -> ReviewResult<Stored<Review>> {
        review.validate()?;

        let stored = self.store.create(review).await?;

        tracing::info!(id = %stored.id, "Review created");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReviewError;
    use async_trait::async_trait;
    use database::mongodb::{
        DEFAULT_QUERY_LIMIT, MemoryDocumentStore, MongoError, MongoResult, bson::Document,
    };
    use mockall::{mock, predicate::*};

    mock! {
        Store {}

        #[async_trait]
        impl DocumentStore<Review> for Store {
            async fn create(&self, data: Review) -> MongoResult<Stored<Review>>;
            async fn query(&self, filter: Document, limit: Option<i64>) -> MongoResult<Vec<Stored<Review>>>;
        }
    }

    fn review(slug: &str, rating: i32) -> Review {
        Review {
            product_slug: slug.to_string(),
            rating,
            title: "Warm enough".to_string(),
            body: "Wore it at -20 without issue.".to_string(),
            author: "Ines".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_by_slug() {
        let service = ReviewService::new(MemoryDocumentStore::new());

        let first = service.create_review(review("arctic-x", 5)).await.unwrap();
        service.create_review(review("aurora-lite", 3)).await.unwrap();
        let second = service.create_review(review("arctic-x", 4)).await.unwrap();

        let listed = service.list_reviews("arctic-x").await.unwrap();
        assert_eq!(listed, vec![first, second]);
    }

    #[tokio::test]
    async fn test_list_unknown_slug_is_empty() {
        let service = ReviewService::new(MemoryDocumentStore::new());
        assert!(service.list_reviews("nope").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_caps_at_default_limit() {
        let service = ReviewService::new(MemoryDocumentStore::new());
        for _ in 0..(DEFAULT_QUERY_LIMIT + 5) {
            service.create_review(review("glacier-pro-3", 4)).await.unwrap();
        }

        let listed = service.list_reviews("glacier-pro-3").await.unwrap();
        assert_eq!(listed.len() as i64, DEFAULT_QUERY_LIMIT);
    }

    #[tokio::test]
    async fn test_rating_out_of_range_never_reaches_store() {
        let mut store = MockStore::new();
        store.expect_create().never();

        let service = ReviewService::new(store);
        for rating in [0, 6] {
            let err = service.create_review(review("arctic-x", rating)).await.unwrap_err();
            assert!(matches!(err, ReviewError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_list_queries_exact_slug_with_default_cap() {
        let mut store = MockStore::new();
        store
            .expect_query()
            .with(eq(doc! { "product_slug": "aurora-lite" }), eq(None))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = ReviewService::new(store);
        service.list_reviews("aurora-lite").await.unwrap();
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut store = MockStore::new();
        store
            .expect_create()
            .returning(|_| Err(MongoError::Malformed("missing created_at".into())));

        let service = ReviewService::new(store);
        let err = service.create_review(review("arctic-x", 5)).await.unwrap_err();
        assert!(matches!(err, ReviewError::Store(_)));
    }
}
