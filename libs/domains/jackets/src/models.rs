use database::mongodb::{Record, Stored};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Cut a jacket is designed for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
    Unisex,
}

/// Use a jacket is rated for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Activity {
    Travel,
    City,
    Hike,
    Bike,
    Commute,
    Snow,
}

fn default_colors() -> Vec<String> {
    ["glacier", "onyx", "frost"].map(String::from).to_vec()
}

fn default_sizes() -> Vec<String> {
    ["XS", "S", "M", "L", "XL", "XXL"].map(String::from).to_vec()
}

/// Heated jacket listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Jacket {
    /// Model name
    pub name: String,
    /// URL-safe identifier, unique across the catalog
    pub slug: String,
    pub gender: Gender,
    #[serde(default)]
    pub activity: Vec<Activity>,
    /// Minimum temperature rating in Celsius
    pub temperature_min_c: i32,
    /// Maximum comfort temperature in Celsius
    pub temperature_max_c: i32,
    /// Max battery life at the low heat setting
    pub battery_life_hours: f64,
    #[validate(range(min = 1, max = 10))]
    pub warmth_level: i32,
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
    #[serde(default = "default_sizes")]
    pub sizes: Vec<String>,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Record for Jacket {
    const COLLECTION: &'static str = "jacket";
}

/// Query parameters for listing jackets. Every clause is optional and they combine with AND.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct JacketFilter {
    /// Exact gender match
    pub gender: Option<Gender>,
    /// Jackets tagged with this activity
    pub activity: Option<String>,
    /// Jackets rated down to at least this temperature (`temperature_min_c <= min_temp`)
    pub min_temp: Option<i32>,
    /// Jackets comfortable up to at least this temperature (`temperature_max_c >= max_temp`)
    pub max_temp: Option<i32>,
}

/// Envelope for jacket listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JacketList {
    /// Stored jackets: the [`Jacket`] fields plus `_id`, `created_at` and `updated_at`
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<Stored<Jacket>>,
}
