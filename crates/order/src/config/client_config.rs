use anyhow::Result;
use shared::config::EnvSource;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub customer_service_url: String,
    pub product_service_url: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl HttpClientConfig {
    pub fn init() -> Result<Self> {
        Self::from_source(&EnvSource::from_env())
    }

    pub fn from_source(env: &EnvSource) -> Result<Self> {
        Ok(Self {
            customer_service_url: env.required("CUSTOMER_SERVICE_URL")?,
            product_service_url: env.required("PRODUCT_SERVICE_URL")?,
            connect_timeout: Duration::from_millis(
                env.parse_or("HTTP_CONNECT_TIMEOUT_MS", 3_000)?,
            ),
            timeout: Duration::from_millis(env.parse_or("HTTP_TIMEOUT_MS", 10_000)?),
        })
    }
}
