use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of both create and full update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,

    #[validate(range(min = 0, message = "quantity must not be negative"))]
    #[serde(default)]
    pub quantity: i64,
}
