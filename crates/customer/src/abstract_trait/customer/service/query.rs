use crate::model::customer::Customer;
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::RequestContext};
use std::sync::Arc;

pub type DynCustomerQueryService = Arc<dyn CustomerQueryServiceTrait + Send + Sync>;

/// `*_cached` lookups read through the cache when one is configured; the
/// plain ones always hit the database.
#[async_trait]
pub trait CustomerQueryServiceTrait {
    async fn find_all(&self, ctx: &RequestContext) -> Result<Vec<Customer>, ServiceError>;
    async fn find_by_id(&self, ctx: &RequestContext, id: &str) -> Result<Customer, ServiceError>;
    async fn find_by_id_cached(
        &self,
        ctx: &RequestContext,
        id: &str,
    ) -> Result<Customer, ServiceError>;
    async fn find_by_email(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> Result<Customer, ServiceError>;
    async fn find_by_email_cached(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> Result<Customer, ServiceError>;
    async fn find_by_name(&self, ctx: &RequestContext, name: &str)
    -> Result<Customer, ServiceError>;
    async fn find_by_name_cached(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<Customer, ServiceError>;
}
