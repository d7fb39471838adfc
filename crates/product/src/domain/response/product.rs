use crate::model::product::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductData {
    pub product: Product,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductsData {
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductIdData {
    pub id: String,
}
