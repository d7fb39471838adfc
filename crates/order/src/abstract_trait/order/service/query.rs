use crate::model::order::Order;
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::RequestContext};
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_by_id(&self, ctx: &RequestContext, id: &str) -> Result<Order, ServiceError>;
    async fn find_by_customer_id(
        &self,
        ctx: &RequestContext,
        customer_id: &str,
    ) -> Result<Vec<Order>, ServiceError>;
}
