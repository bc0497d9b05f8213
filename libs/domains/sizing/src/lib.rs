//! Sizing Domain
//!
//! Pure size recommendation from height, weight and build; nothing is persisted.
//!
//! ```rust
//! use domain_sizing::{Build, Size, recommend_size};
//!
//! assert_eq!(recommend_size(200, 100, Build::Broad), Size::XXL);
//! assert_eq!(recommend_size(150, 50, Build::Slim), Size::XS);
//! ```

pub mod handlers;
pub mod models;
pub mod recommend;

pub use handlers::ApiDoc;
pub use models::{Build, Size, SizeInput, SizeRecommendation};
pub use recommend::{SIZE_ORDER, recommend_size};
