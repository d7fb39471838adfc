use crate::model::order::CustomerSnapshot;
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::RequestContext};
use std::sync::Arc;

pub type DynCustomerClient = Arc<dyn CustomerClientTrait + Send + Sync>;

/// Resolves a customer reference into a snapshot with one remote call.
///
/// Fails with `NotFound` when no customer has the email and with
/// `UpstreamUnavailable` on transport failures, unexpected status codes or
/// unreadable bodies. Never retries.
#[async_trait]
pub trait CustomerClientTrait {
    async fn find_by_email(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> Result<CustomerSnapshot, ServiceError>;
}
