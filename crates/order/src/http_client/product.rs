use crate::{
    abstract_trait::http_client::ProductClientTrait,
    domain::response::product::ProductEnvelope,
    http_client::{endpoint, malformed_body, send, unexpected_status},
    model::order::ProductDetails,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use shared::{
    errors::ServiceError,
    utils::{Metrics, RequestContext, Resource},
};
use tracing::info;

#[derive(Clone)]
pub struct ProductHttpClient {
    client: Client,
    base_url: Url,
    metrics: Metrics,
}

impl ProductHttpClient {
    pub fn new(client: Client, base_url: Url, metrics: Metrics) -> Self {
        Self {
            client,
            base_url,
            metrics,
        }
    }
}

#[async_trait]
impl ProductClientTrait for ProductHttpClient {
    async fn find_by_name(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<ProductDetails, ServiceError> {
        let url = endpoint(&self.base_url, &["v1", "products", "name", name])?;

        let reference = format!("product {name}");

        let response = send(
            ctx,
            self.client.get(url),
            &self.metrics,
            Resource::Product,
            "find_by_name",
            &reference,
        )
        .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(unexpected_status(
                ctx,
                status,
                || format!("product {name} not found"),
                "product-service",
                &reference,
            ));
        }

        let envelope = response
            .json::<ProductEnvelope>()
            .await
            .map_err(|err| malformed_body(ctx, err, "product-service", &reference))?;

        let product = ProductDetails::from(envelope.data.product);
        info!(trace_id = %ctx.trace_id(), "Resolved product {} for {name}", product.id);

        Ok(product)
    }
}
