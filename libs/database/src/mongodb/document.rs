//! MongoDB implementation of [`DocumentStore`]

use std::marker::PhantomData;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{self, Document},
    options::FindOptions,
};
use tracing::instrument;

use super::MongoResult;
use super::store::{
    CREATED_AT, DocumentStore, Record, Stored, UPDATED_AT, effective_limit, render_id,
    timestamp_now,
};

/// Stores each `T` as one document in the `T::COLLECTION` collection.
///
/// The collection is untyped so documents written by other tools (string ids, ISO string
/// timestamps) still load.
pub struct MongoDocumentStore<T> {
    collection: Collection<Document>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> MongoDocumentStore<T> {
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let jackets = MongoDocumentStore::<Jacket>::new(&client.database("amberarctic"));
    /// ```
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Document>(T::COLLECTION),
            _record: PhantomData,
        }
    }

    /// Get the underlying collection for index management
    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }
}

impl<T> Clone for MongoDocumentStore<T> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Record> DocumentStore<T> for MongoDocumentStore<T> {
    #[instrument(skip(self, data), fields(collection = T::COLLECTION))]
    async fn create(&self, data: T) -> MongoResult<Stored<T>> {
        let now = timestamp_now();
        let stamp = bson::DateTime::from_millis(now.timestamp_millis());

        let mut doc = bson::to_document(&data)?;
        doc.insert(CREATED_AT, stamp);
        doc.insert(UPDATED_AT, stamp);

        let result = self.collection.insert_one(doc).await?;
        let id = render_id(&result.inserted_id);

        tracing::debug!(id = %id, "Document inserted");
        Ok(Stored {
            id,
            data,
            created_at: now,
            updated_at: now,
        })
    }

    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn query(&self, filter: Document, limit: Option<i64>) -> MongoResult<Vec<Stored<T>>> {
        let options = FindOptions::builder()
            .limit(effective_limit(limit))
            .build();

        let cursor = self.collection.find(filter).with_options(options).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;

        docs.into_iter().map(Stored::from_document).collect()
    }
}
