use crate::model::customer::Customer;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCustomerQueryRepository = Arc<dyn CustomerQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CustomerQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Customer, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Customer, RepositoryError>;
    /// Names are not unique: the earliest created customer with `name` wins.
    async fn find_by_name(&self, name: &str) -> Result<Customer, RepositoryError>;
}
