use crate::{
    domain::requests::customer::{CreateCustomerRequest, UpdateCustomerRequest},
    model::customer::Customer,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCustomerCommandRepository = Arc<dyn CustomerCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CustomerCommandRepositoryTrait {
    async fn create(
        &self,
        id: &str,
        req: &CreateCustomerRequest,
    ) -> Result<Customer, RepositoryError>;
    async fn update(
        &self,
        id: &str,
        req: &UpdateCustomerRequest,
    ) -> Result<Customer, RepositoryError>;
    /// Returns the removed record.
    async fn delete(&self, id: &str) -> Result<Customer, RepositoryError>;
}
