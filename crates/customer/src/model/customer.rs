use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    #[schema(value_type = String, format = Date, example = "1990-05-17")]
    pub birthdate: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
