use crate::model::order::ProductDetails;
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::RequestContext};
use std::sync::Arc;

pub type DynProductClient = Arc<dyn ProductClientTrait + Send + Sync>;

/// Resolves a product name into its catalog details. Same failure
/// taxonomy as the customer client.
#[async_trait]
pub trait ProductClientTrait {
    async fn find_by_name(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<ProductDetails, ServiceError>;
}
