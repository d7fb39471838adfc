use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};
use utoipa::ToSchema;

/// Envelope wrapping every JSON body the services return.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponse<T> {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[schema(example = "12ms")]
    pub elapsed_time: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, elapsed: Duration, data: T) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now(),
            elapsed_time: format_elapsed(elapsed),
            data,
        }
    }
}

impl<T: Serialize> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{json}"),
            Err(e) => write!(f, "Error serializing ApiResponse to JSON: {e}"),
        }
    }
}

/// `data: {}` for responses that carry nothing.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Empty {}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{}ms", elapsed.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_envelope_fields() {
        let response = ApiResponse::new("Order created", Duration::from_millis(37), json!({"id": "abc"}));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["message"], "Order created");
        assert_eq!(value["elapsed_time"], "37ms");
        assert_eq!(value["data"]["id"], "abc");
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn empty_data_is_an_object() {
        let response = ApiResponse::new("Order deleted", Duration::ZERO, Empty::default());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["data"], json!({}));
        assert_eq!(value["elapsed_time"], "0ms");
    }
}
