use crate::{
    domain::requests::customer::{CreateCustomerRequest, UpdateCustomerRequest},
    model::customer::Customer,
};
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::RequestContext};
use std::sync::Arc;

pub type DynCustomerCommandService = Arc<dyn CustomerCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CustomerCommandServiceTrait {
    async fn create(
        &self,
        ctx: &RequestContext,
        req: &CreateCustomerRequest,
    ) -> Result<String, ServiceError>;
    async fn update(
        &self,
        ctx: &RequestContext,
        id: &str,
        req: &UpdateCustomerRequest,
    ) -> Result<Customer, ServiceError>;
    async fn delete(&self, ctx: &RequestContext, id: &str) -> Result<(), ServiceError>;
}
