use domain_jackets::Gender;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

/// Body shape, shifting the size one step down (slim) or up (broad)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Build {
    Slim,
    Regular,
    Athletic,
    Broad,
}

impl Build {
    /// Steps to move along [`crate::SIZE_ORDER`]
    pub fn adjustment(self) -> i32 {
        match self {
            Build::Slim => -1,
            Build::Regular | Build::Athletic => 0,
            Build::Broad => 1,
        }
    }
}

/// Garment size, smallest first
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
pub enum Size {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
}

/// Body metrics for a size recommendation
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SizeInput {
    pub height_cm: i32,
    pub weight_kg: i32,
    pub build: Build,
    /// Accepted for clients that send it; does not affect the result
    #[serde(default)]
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SizeRecommendation {
    pub recommended: Size,
}
