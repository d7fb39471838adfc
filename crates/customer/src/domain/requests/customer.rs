use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub surname: String,

    #[validate(email(message = "email must be a valid address"))]
    #[serde(default)]
    pub email: String,

    #[schema(value_type = String, format = Date, example = "1990-05-17")]
    pub birthdate: NaiveDate,
}

/// Replaces name, surname and email. The birthdate is fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub surname: String,

    #[validate(email(message = "email must be a valid address"))]
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::utils::validation_messages;

    #[test]
    fn birthdate_is_a_plain_date() {
        let req: CreateCustomerRequest = serde_json::from_str(
            r#"{"name":"Ada","surname":"Lovelace","email":"a@x.com","birthdate":"1815-12-10"}"#,
        )
        .unwrap();

        assert_eq!(req.birthdate, NaiveDate::from_ymd_opt(1815, 12, 10).unwrap());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_missing_name_and_bad_email() {
        let req = UpdateCustomerRequest {
            name: String::new(),
            surname: "Lovelace".into(),
            email: "not-an-email".into(),
        };

        assert_eq!(
            validation_messages(&req.validate().unwrap_err()),
            vec![
                "email: email must be a valid address".to_string(),
                "name: name must not be empty".to_string(),
            ]
        );
    }
}
