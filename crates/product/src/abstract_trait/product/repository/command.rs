use crate::{domain::requests::product::ProductRequest, model::product::Product};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create(&self, id: &str, req: &ProductRequest) -> Result<Product, RepositoryError>;
    async fn update(&self, id: &str, req: &ProductRequest) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
