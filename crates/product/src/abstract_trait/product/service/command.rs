use crate::{domain::requests::product::ProductRequest, model::product::Product};
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::RequestContext};
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create(&self, ctx: &RequestContext, req: &ProductRequest)
    -> Result<String, ServiceError>;
    async fn update(
        &self,
        ctx: &RequestContext,
        id: &str,
        req: &ProductRequest,
    ) -> Result<Product, ServiceError>;
    async fn delete(&self, ctx: &RequestContext, id: &str) -> Result<(), ServiceError>;
}
