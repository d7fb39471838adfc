use crate::{
    config::{Config, HttpClientConfig, StoreBackend},
    di::{DependenciesInject, DependenciesInjectDeps},
    http_client::HttpClients,
    repository::memory::InMemoryOrderStore,
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{config::ConnectionPool, utils::Metrics};
use std::{fmt, sync::Arc, time::Duration};
use tracing::warn;

const METRICS_PREFIX: &str = "order_service";

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub metrics: Metrics,
    pub request_timeout: Duration,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("registry", &self.registry)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: Option<ConnectionPool>, config: &Config) -> Result<Self> {
        let metrics = Metrics::new();

        let client_config = HttpClientConfig::init().context("failed http client config")?;
        let clients =
            HttpClients::init(&client_config, metrics.clone()).context("failed http clients")?;

        let deps = match (config.store, pool) {
            (StoreBackend::Postgres, Some(pool)) => {
                DependenciesInjectDeps::postgres(pool, clients, metrics.clone())
            }
            (StoreBackend::Postgres, None) => {
                anyhow::bail!("ORDER_STORE=postgres requires a database pool")
            }
            (StoreBackend::Memory, _) => {
                warn!("⚠️ Orders are kept in memory and lost on restart");
                DependenciesInjectDeps::in_memory(
                    InMemoryOrderStore::new(),
                    clients,
                    metrics.clone(),
                )
            }
        };

        Ok(Self::from_container(
            DependenciesInject::new(deps),
            metrics,
            config.request_timeout,
        ))
    }

    pub fn from_container(
        di_container: DependenciesInject,
        metrics: Metrics,
        request_timeout: Duration,
    ) -> Self {
        let mut registry = Registry::default();
        metrics.register(METRICS_PREFIX, &mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
            metrics,
            request_timeout,
        }
    }
}
