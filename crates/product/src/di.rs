use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::{DynProductCommandService, DynProductQueryService},
    },
    repository::{ProductCommandRepository, ProductQueryRepository},
    service::{ProductCommandService, ProductQueryService},
};
use shared::{config::ConnectionPool, utils::Metrics};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"DynProductQueryService")
            .field("product_command", &"DynProductCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
    pub metrics: Metrics,
}

impl DependenciesInjectDeps {
    pub fn postgres(pool: ConnectionPool, metrics: Metrics) -> Self {
        Self {
            query: Arc::new(ProductQueryRepository::new(pool.clone())),
            command: Arc::new(ProductCommandRepository::new(pool)),
            metrics,
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            query,
            command,
            metrics,
        } = deps;

        Self {
            product_query: Arc::new(ProductQueryService::new(query, metrics.clone())),
            product_command: Arc::new(ProductCommandService::new(command, metrics)),
        }
    }
}
