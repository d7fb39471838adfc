use crate::model::order::Order;
use async_trait::async_trait;
use shared::{errors::RepositoryError, utils::Identifier};
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_id(&self, id: &Identifier) -> Result<Order, RepositoryError>;
    /// Orders embedding `customer_id`, oldest first. Empty when none match.
    async fn find_by_customer_id(&self, customer_id: &str) -> Result<Vec<Order>, RepositoryError>;
}
