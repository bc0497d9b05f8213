//! Database library: MongoDB connectivity plus a generic, record-typed document store.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, health checks and the [`mongodb::DocumentStore`]
//!   abstraction with its MongoDB and in-memory implementations
//! - `config` - `core_config::FromEnv` support for [`mongodb::MongoConfig`]
//! - `all` - everything above
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, DocumentStore, MongoConfig, MongoDocumentStore};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "amberarctic");
//! let client = mongodb::connect_from_config(&config).await?;
//! let db = client.database(config.database());
//!
//! let jackets = MongoDocumentStore::<Jacket>::new(&db);
//! let stored = jackets.create(jacket).await?;
//! let hits = jackets.query(doc! { "gender": "women" }, Some(100)).await?;
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;
