use crate::model::order::CustomerSnapshot;
use serde::Deserialize;

/// Subset of the customer-service envelope the resolver reads.
#[derive(Debug, Deserialize)]
pub struct CustomerEnvelope {
    pub data: CustomerPayload,
}

#[derive(Debug, Deserialize)]
pub struct CustomerPayload {
    pub customer: CustomerDto,
}

#[derive(Debug, Deserialize)]
pub struct CustomerDto {
    pub customer_id: String,
    pub name: String,
    pub email: String,
}

impl From<CustomerDto> for CustomerSnapshot {
    fn from(dto: CustomerDto) -> Self {
        Self {
            id: dto.customer_id,
            name: dto.name,
            email: dto.email,
        }
    }
}
