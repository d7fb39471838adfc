use crate::model::order::Order;
use async_trait::async_trait;
use shared::{errors::RepositoryError, utils::Identifier};
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn insert(&self, order: &Order) -> Result<(), RepositoryError>;
    /// `NotFound` when no document had the id.
    async fn delete_by_id(&self, id: &Identifier) -> Result<(), RepositoryError>;
}
