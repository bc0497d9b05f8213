//! Record-typed document store abstraction.
//!
//! Services depend on [`DocumentStore<T>`] rather than on a MongoDB handle, so the same code
//! runs against [`super::MongoDocumentStore`] in production and [`super::MemoryDocumentStore`]
//! in tests.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::{MongoError, MongoResult};

/// Cap applied when a query does not ask for a specific limit
pub const DEFAULT_QUERY_LIMIT: i64 = 50;

/// Field holding the insertion time
pub const CREATED_AT: &str = "created_at";

/// Field holding the last write time
pub const UPDATED_AT: &str = "updated_at";

/// A record type persisted as one document per value in its own collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Collection the records live in
    const COLLECTION: &'static str;
}

/// A record as it exists in the store: the caller's fields plus the identifier and the
/// timestamps assigned by the store at write time.
///
/// Serializes flat, e.g. `{"_id": "6650…", "name": "…", "created_at": "…", "updated_at": "…"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(flatten)]
    pub data: T,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<T> Stored<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T: Record> Stored<T> {
    /// Split a raw document into identifier, timestamps and record fields.
    pub fn from_document(mut doc: Document) -> MongoResult<Self> {
        let id = doc
            .remove("_id")
            .map(|raw| render_id(&raw))
            .ok_or_else(|| MongoError::Malformed(format!("{} document without _id", T::COLLECTION)))?;
        let created_at = take_timestamp(&mut doc, CREATED_AT)?;
        let updated_at = take_timestamp(&mut doc, UPDATED_AT)?;
        let data = mongodb::bson::from_document(doc)?;

        Ok(Self {
            id,
            data,
            created_at,
            updated_at,
        })
    }
}

/// Data access for one record type.
///
/// `filter` uses MongoDB query syntax. Implementations must assign the identifier and both
/// timestamps themselves and must surface backend failures as errors rather than empty
/// results.
#[async_trait]
pub trait DocumentStore<T: Record>: Send + Sync {
    /// Insert `data`, stamping `created_at` and `updated_at` with the current time.
    async fn create(&self, data: T) -> MongoResult<Stored<T>>;

    /// Up to `limit` records matching `filter` in store order. `None` or a non-positive limit
    /// means [`DEFAULT_QUERY_LIMIT`].
    async fn query(&self, filter: Document, limit: Option<i64>) -> MongoResult<Vec<Stored<T>>>;
}

/// Resolve the effective cap for a query
pub fn effective_limit(limit: Option<i64>) -> i64 {
    limit.filter(|l| *l > 0).unwrap_or(DEFAULT_QUERY_LIMIT)
}

/// Current time truncated to the millisecond precision BSON datetimes keep, so a freshly
/// created record compares equal to the same record read back.
pub fn timestamp_now() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

/// Identifier as exposed over the API: ObjectIds become 24-char hex, strings pass through.
pub fn render_id(raw: &Bson) -> String {
    match raw {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn take_timestamp(doc: &mut Document, field: &str) -> MongoResult<DateTime<Utc>> {
    match doc.remove(field) {
        Some(Bson::DateTime(dt)) => DateTime::from_timestamp_millis(dt.timestamp_millis())
            .ok_or_else(|| MongoError::Malformed(format!("{} out of range", field))),
        Some(Bson::String(raw)) => parse_legacy_timestamp(&raw)
            .ok_or_else(|| MongoError::Malformed(format!("unparseable {}: {}", field, raw))),
        Some(other) => Err(MongoError::Malformed(format!(
            "{} has unexpected type {:?}",
            field,
            other.element_type()
        ))),
        None => Err(MongoError::Malformed(format!("missing {}", field))),
    }
}

/// Earlier deployments wrote timestamps as ISO-8601 strings, usually without an offset
/// (naive UTC).
fn parse_legacy_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
