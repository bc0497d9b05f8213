use database::mongodb::{Record, Stored};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Customer review of a jacket. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Review {
    /// Slug of the reviewed jacket; not checked against the catalog
    pub product_slug: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    pub title: String,
    pub body: String,
    pub author: String,
}

impl Record for Review {
    const COLLECTION: &'static str = "review";
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewList {
    /// Stored reviews: the [`Review`] fields plus `_id`, `created_at` and `updated_at`
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<Stored<Review>>,
}
