use crate::model::customer::Customer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerData {
    pub customer: Customer,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomersData {
    pub customers: Vec<Customer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerIdData {
    pub id: String,
}
