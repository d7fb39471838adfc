mod customer;
mod product;

pub use self::customer::CustomerHttpClient;
pub use self::product::ProductHttpClient;

use crate::config::HttpClientConfig;
use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use shared::{
    errors::ServiceError,
    utils::{Metrics, Resource, RequestContext, Status, inject_trace_context},
};
use tokio::time::Instant;
use tracing::{debug, error};

/// Resolvers for the two collaborator services, sharing one connection
/// pool.
#[derive(Clone)]
pub struct HttpClients {
    pub customer: CustomerHttpClient,
    pub product: ProductHttpClient,
}

impl HttpClients {
    pub fn init(config: &HttpClientConfig, metrics: Metrics) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .pool_idle_timeout(config.timeout * 3)
            .build()
            .context("Failed to build HTTP client")?;

        let customer_base = Url::parse(&config.customer_service_url).with_context(|| {
            format!(
                "Invalid customer-service address: {}",
                config.customer_service_url
            )
        })?;
        let product_base = Url::parse(&config.product_service_url).with_context(|| {
            format!(
                "Invalid product-service address: {}",
                config.product_service_url
            )
        })?;

        Ok(Self {
            customer: CustomerHttpClient::new(client.clone(), customer_base, metrics.clone()),
            product: ProductHttpClient::new(client, product_base, metrics),
        })
    }
}

/// Appends percent-encoded path segments to `base`.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ServiceError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ServiceError::UpstreamUnavailable(format!("invalid base url {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Sends one GET carrying the request's trace headers and remaining
/// deadline, and records its latency under `resource`. `reference` names the
/// looked-up record in every error.
pub(crate) async fn send(
    ctx: &RequestContext,
    request: RequestBuilder,
    metrics: &Metrics,
    resource: Resource,
    operation: &str,
    reference: &str,
) -> Result<Response, ServiceError> {
    let start = Instant::now();

    let mut request = request.headers(inject_trace_context(ctx));
    if let Some(remaining) = ctx.remaining() {
        request = request.timeout(remaining);
    }

    let result = request.send().await;
    let status = match &result {
        Ok(response) if response.status() == StatusCode::OK => Status::Success,
        _ => Status::Error,
    };
    metrics.record_external(resource.clone(), operation, status, start.elapsed().as_secs_f64());

    result.map_err(|err| {
        error!(
            trace_id = %ctx.trace_id(),
            "❌ {resource:?} {operation} transport failure for {reference}: {err}"
        );
        ServiceError::UpstreamUnavailable(format!(
            "{reference}: {resource:?} service unreachable: {err}"
        ))
    })
}

/// Maps a non-200 response onto the resolver error taxonomy.
pub(crate) fn unexpected_status(
    ctx: &RequestContext,
    status: StatusCode,
    not_found: impl FnOnce() -> String,
    service: &str,
    reference: &str,
) -> ServiceError {
    if status == StatusCode::NOT_FOUND {
        let message = not_found();
        debug!(trace_id = %ctx.trace_id(), "{message}");
        return ServiceError::NotFound(message);
    }

    let message = format!("{reference}: {service} answered {status}");
    error!(trace_id = %ctx.trace_id(), "❌ {message}");
    ServiceError::UpstreamUnavailable(message)
}

/// A 200 whose body does not decode.
pub(crate) fn malformed_body(
    ctx: &RequestContext,
    err: reqwest::Error,
    service: &str,
    reference: &str,
) -> ServiceError {
    let message = format!("{reference}: {service} returned a malformed body: {err}");
    error!(trace_id = %ctx.trace_id(), "❌ {message}");
    ServiceError::UpstreamUnavailable(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_path_segments() {
        let base = Url::parse("http://product-service:8080/").unwrap();
        let url = endpoint(&base, &["v1", "products", "name", "Blue Widget"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://product-service:8080/v1/products/name/Blue%20Widget"
        );
    }

    #[test]
    fn keeps_base_path_prefix() {
        let base = Url::parse("http://gateway/customer").unwrap();
        let url = endpoint(&base, &["v2", "customers", "email", "a@x.com"]).unwrap();
        assert_eq!(url.path(), "/customer/v2/customers/email/a@x.com");
    }
}
