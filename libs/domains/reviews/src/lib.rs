//! Reviews Domain
//!
//! Append-only customer reviews, listed per jacket slug.
//!
//! ```rust,no_run
//! use database::mongodb::{Client, MongoDocumentStore};
//! use domain_reviews::{ReviewService, handlers};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let service = ReviewService::new(MongoDocumentStore::new(&client.database("amberarctic")));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

pub use error::{ReviewError, ReviewResult};
pub use handlers::ApiDoc;
pub use models::{Review, ReviewList};
pub use service::ReviewService;
