//! Jackets Domain
//!
//! Catalog of heated jackets: filtered listing, slug lookup and startup seeding, on top of a
//! [`database::mongodb::DocumentStore`].
//!
//! ```text
//! Handlers  → HTTP endpoints
//! Service   → filtering, validation, seeding
//! Store     → DocumentStore<Jacket> (MongoDB or in-memory)
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::mongodb::{Client, MongoDocumentStore};
//! use domain_jackets::{JacketService, handlers, sample_jackets};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("amberarctic");
//!
//! let service = JacketService::new(MongoDocumentStore::new(&db));
//! service.seed_if_empty(sample_jackets()).await?;
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod service;

pub use error::{JacketError, JacketResult};
pub use handlers::ApiDoc;
pub use models::{Activity, Gender, Jacket, JacketFilter, JacketList};
pub use seed::sample_jackets;
pub use service::{JacketService, LIST_LIMIT};
