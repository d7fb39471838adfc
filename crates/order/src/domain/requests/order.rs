use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderItemRequest {
    #[validate(length(min = 1, message = "product name must not be empty"))]
    #[serde(default)]
    pub name: String,

    #[validate(range(min = 1, message = "quantity must be greater than zero"))]
    #[serde(default)]
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "customer email must not be empty"))]
    #[serde(default)]
    pub customer_email: String,

    #[validate(length(min = 1, message = "at least one product is required"), nested)]
    #[serde(default)]
    pub products: Vec<CreateOrderItemRequest>,
}

impl CreateOrderRequest {
    pub fn new<I, S>(customer_email: impl Into<String>, products: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        Self {
            customer_email: customer_email.into(),
            products: products
                .into_iter()
                .map(|(name, quantity)| CreateOrderItemRequest {
                    name: name.into(),
                    quantity,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::utils::validation_messages;

    #[test]
    fn well_formed_request_passes() {
        let req = CreateOrderRequest::new("a@x.com", [("Widget", 2), ("Gadget", 1)]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn reports_every_violation() {
        let req = CreateOrderRequest::new("", [("", 0)]);
        let messages = validation_messages(&req.validate().unwrap_err());

        assert_eq!(
            messages,
            vec![
                "customer_email: customer email must not be empty".to_string(),
                "products[0].name: product name must not be empty".to_string(),
                "products[0].quantity: quantity must be greater than zero".to_string(),
            ]
        );
    }

    #[test]
    fn empty_product_list_is_rejected() {
        let req: CreateOrderRequest =
            serde_json::from_str(r#"{"customer_email":"a@x.com"}"#).unwrap();
        let messages = validation_messages(&req.validate().unwrap_err());
        assert_eq!(
            messages,
            vec!["products: at least one product is required".to_string()]
        );
    }
}
