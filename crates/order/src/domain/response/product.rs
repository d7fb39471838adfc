use crate::model::order::ProductDetails;
use serde::Deserialize;

/// Subset of the product-service envelope the resolver reads.
#[derive(Debug, Deserialize)]
pub struct ProductEnvelope {
    pub data: ProductPayload,
}

#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub product: ProductDto,
}

#[derive(Debug, Deserialize)]
pub struct ProductDto {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}

impl From<ProductDto> for ProductDetails {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.product_id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
        }
    }
}
