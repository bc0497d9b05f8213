//! MongoDB connector and record store
//!
//! Connection management plus the [`DocumentStore`] abstraction the domain services are
//! written against.

mod config;
mod connector;
mod document;
mod error;
mod health;
mod memory;
mod store;

pub use config::{DATABASE_VARS, MongoConfig, URL_VARS};
pub use connector::{connect_from_config, connect_from_config_with_retry};
pub use document::MongoDocumentStore;
pub use error::{MongoError, MongoResult};
pub use health::{HealthStatus, check_health};
pub use memory::MemoryDocumentStore;
pub use store::{
    CREATED_AT, DEFAULT_QUERY_LIMIT, DocumentStore, Record, Stored, UPDATED_AT, effective_limit,
    timestamp_now,
};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database, bson};
