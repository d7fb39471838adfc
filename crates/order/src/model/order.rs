use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::utils::Identifier;
use utoipa::ToSchema;

/// Copy of the customer taken when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerSnapshot {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Catalog fields of a product as resolved by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Copy of a product line taken when the order was placed. `quantity` is
/// the quantity ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductSnapshot {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
}

impl ProductSnapshot {
    pub fn ordered(details: ProductDetails, quantity: i64) -> Self {
        let ProductDetails {
            id,
            name,
            description,
            price,
        } = details;

        Self {
            id,
            name,
            description,
            price,
            quantity,
        }
    }
}

/// The persisted order document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    #[schema(value_type = String, example = "0190f5c3a1b27c4e9d1f2a3b4c5d6e7f")]
    pub id: Identifier,
    pub customer: CustomerSnapshot,
    pub products: Vec<ProductSnapshot>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn new(
        id: Identifier,
        customer: CustomerSnapshot,
        products: Vec<ProductSnapshot>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer,
            products,
            created_at,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_shape_is_stable() {
        let id = Identifier::generate();
        let created_at = Utc::now();
        let order = Order::new(
            id,
            CustomerSnapshot {
                id: "c1".into(),
                name: "Ada".into(),
                email: "ada@x.com".into(),
            },
            vec![ProductSnapshot::ordered(
                ProductDetails {
                    id: "p1".into(),
                    name: "Widget".into(),
                    description: "A widget".into(),
                    price: 10.0,
                },
                2,
            )],
            created_at,
        );

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["id"], json!(id.to_string()));
        assert_eq!(value["customer"], json!({"id": "c1", "name": "Ada", "email": "ada@x.com"}));
        assert_eq!(
            value["products"][0],
            json!({"id": "p1", "name": "Widget", "description": "A widget", "price": 10.0, "quantity": 2})
        );
        assert!(value["updated_at"].is_null());

        let decoded: Order = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, order);
    }
}
