use crate::{
    abstract_trait::http_client::CustomerClientTrait,
    domain::response::customer::CustomerEnvelope,
    http_client::{endpoint, malformed_body, send, unexpected_status},
    model::order::CustomerSnapshot,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use shared::{
    errors::ServiceError,
    utils::{Metrics, RequestContext, Resource},
};
use tracing::info;

#[derive(Clone)]
pub struct CustomerHttpClient {
    client: Client,
    base_url: Url,
    metrics: Metrics,
}

impl CustomerHttpClient {
    pub fn new(client: Client, base_url: Url, metrics: Metrics) -> Self {
        Self {
            client,
            base_url,
            metrics,
        }
    }
}

#[async_trait]
impl CustomerClientTrait for CustomerHttpClient {
    async fn find_by_email(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> Result<CustomerSnapshot, ServiceError> {
        let url = endpoint(&self.base_url, &["v2", "customers", "email", email])?;

        let reference = format!("customer {email}");

        let response = send(
            ctx,
            self.client.get(url),
            &self.metrics,
            Resource::Customer,
            "find_by_email",
            &reference,
        )
        .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(unexpected_status(
                ctx,
                status,
                || format!("customer with email {email} not found"),
                "customer-service",
                &reference,
            ));
        }

        let envelope = response
            .json::<CustomerEnvelope>()
            .await
            .map_err(|err| malformed_body(ctx, err, "customer-service", &reference))?;

        let customer = CustomerSnapshot::from(envelope.data.customer);
        info!(trace_id = %ctx.trace_id(), "Resolved customer {} for {email}", customer.id);

        Ok(customer)
    }
}
