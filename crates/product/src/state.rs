use crate::di::{DependenciesInject, DependenciesInjectDeps};
use prometheus_client::registry::Registry;
use shared::{config::ConnectionPool, utils::Metrics};
use std::{fmt, sync::Arc};

const METRICS_PREFIX: &str = "product_service";

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub metrics: Metrics,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("registry", &self.registry)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        let metrics = Metrics::new();
        let deps = DependenciesInjectDeps::postgres(pool, metrics.clone());

        Self::from_container(DependenciesInject::new(deps), metrics)
    }

    pub fn from_container(di_container: DependenciesInject, metrics: Metrics) -> Self {
        let mut registry = Registry::default();
        metrics.register(METRICS_PREFIX, &mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
            metrics,
        }
    }
}
