//! In-process [`DocumentStore`] for tests and local runs without a database.
//!
//! Documents are held exactly as the MongoDB store would write them, and reads go through the
//! same decoding path. Filters support the subset of the query language the services use:
//! implicit equality (matching array elements too), `$eq`, `$ne`, `$in` and the range
//! operators `$lt`, `$lte`, `$gt`, `$gte`. Top-level conditions are conjunctive.

use std::cmp::Ordering;
use std::marker::PhantomData;

use async_trait::async_trait;
use mongodb::bson::{self, Bson, Document, oid::ObjectId};
use tokio::sync::RwLock;

use super::store::{
    CREATED_AT, DocumentStore, Record, Stored, UPDATED_AT, effective_limit, timestamp_now,
};
use super::{MongoError, MongoResult};

pub struct MemoryDocumentStore<T> {
    docs: RwLock<Vec<Document>>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> MemoryDocumentStore<T> {
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(Vec::new()),
            _record: PhantomData,
        }
    }

    /// Insert a raw document as-is, e.g. one shaped like legacy data.
    pub async fn insert_raw(&self, doc: Document) {
        self.docs.write().await.push(doc);
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

impl<T: Record> Default for MemoryDocumentStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> DocumentStore<T> for MemoryDocumentStore<T> {
    async fn create(&self, data: T) -> MongoResult<Stored<T>> {
        let now = timestamp_now();
        let stamp = bson::DateTime::from_millis(now.timestamp_millis());
        let oid = ObjectId::new();

        let mut doc = Document::new();
        doc.insert("_id", oid);
        for (key, value) in bson::to_document(&data)? {
            doc.insert(key, value);
        }
        doc.insert(CREATED_AT, stamp);
        doc.insert(UPDATED_AT, stamp);

        self.docs.write().await.push(doc);

        Ok(Stored {
            id: oid.to_hex(),
            data,
            created_at: now,
            updated_at: now,
        })
    }

    async fn query(&self, filter: Document, limit: Option<i64>) -> MongoResult<Vec<Stored<T>>> {
        let limit = effective_limit(limit) as usize;
        let docs = self.docs.read().await;

        let mut matched = Vec::new();
        for doc in docs.iter() {
            if matched.len() == limit {
                break;
            }
            if matches_filter(doc, &filter)? {
                matched.push(Stored::from_document(doc.clone())?);
            }
        }
        Ok(matched)
    }
}

fn matches_filter(doc: &Document, filter: &Document) -> MongoResult<bool> {
    for (field, condition) in filter {
        if !matches_condition(doc.get(field), condition)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn matches_condition(value: Option<&Bson>, condition: &Bson) -> MongoResult<bool> {
    let operators = match condition {
        Bson::Document(ops) if ops.keys().next().is_some_and(|k| k.starts_with('$')) => ops,
        expected => return Ok(value.is_some_and(|v| equals(v, expected))),
    };

    for (op, operand) in operators {
        let ok = match op.as_str() {
            "$eq" => value.is_some_and(|v| equals(v, operand)),
            "$ne" => !value.is_some_and(|v| equals(v, operand)),
            "$in" => {
                let Bson::Array(candidates) = operand else {
                    return Err(MongoError::Malformed("$in needs an array".to_string()));
                };
                value.is_some_and(|v| candidates.iter().any(|c| equals(v, c)))
            }
            "$lt" => compares(value, operand, |o| o == Ordering::Less),
            "$lte" => compares(value, operand, |o| o != Ordering::Greater),
            "$gt" => compares(value, operand, |o| o == Ordering::Greater),
            "$gte" => compares(value, operand, |o| o != Ordering::Less),
            other => {
                return Err(MongoError::Malformed(format!(
                    "unsupported query operator {}",
                    other
                )));
            }
        };
        if !ok {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Equality with array-field semantics: `{tags: "x"}` matches `tags: ["x", "y"]`.
fn equals(value: &Bson, expected: &Bson) -> bool {
    if scalar_eq(value, expected) {
        return true;
    }
    match value {
        Bson::Array(items) => items.iter().any(|item| scalar_eq(item, expected)),
        _ => false,
    }
}

fn scalar_eq(a: &Bson, b: &Bson) -> bool {
    match (as_number(a), as_number(b)) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

fn compares(value: Option<&Bson>, operand: &Bson, accept: impl Fn(Ordering) -> bool) -> bool {
    let Some(value) = value else {
        return false;
    };
    let ordering = match (value, operand) {
        (Bson::String(a), Bson::String(b)) => Some(a.cmp(b)),
        (Bson::DateTime(a), Bson::DateTime(b)) => Some(a.cmp(b)),
        (a, b) => match (as_number(a), as_number(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y),
            _ => None,
        },
    };
    ordering.is_some_and(accept)
}

fn as_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(n) => Some(f64::from(*n)),
        Bson::Int64(n) => Some(*n as f64),
        Bson::Double(n) => Some(*n),
        _ => None,
    }
}
