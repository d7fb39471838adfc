use crate::model::product::Product;
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::RequestContext};
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self, ctx: &RequestContext) -> Result<Vec<Product>, ServiceError>;
    async fn find_by_id(&self, ctx: &RequestContext, id: &str) -> Result<Product, ServiceError>;
    async fn find_by_name(&self, ctx: &RequestContext, name: &str)
    -> Result<Product, ServiceError>;
}
