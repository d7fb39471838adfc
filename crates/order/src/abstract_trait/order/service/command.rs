use crate::domain::requests::order::CreateOrderRequest;
use async_trait::async_trait;
use shared::{
    errors::ServiceError,
    utils::{Identifier, RequestContext},
};
use std::sync::Arc;

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        ctx: &RequestContext,
        req: &CreateOrderRequest,
    ) -> Result<Identifier, ServiceError>;
    async fn delete_order(&self, ctx: &RequestContext, id: &str) -> Result<(), ServiceError>;
}
