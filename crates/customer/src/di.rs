use crate::{
    abstract_trait::customer::{
        repository::{DynCustomerCommandRepository, DynCustomerQueryRepository},
        service::{DynCustomerCommandService, DynCustomerQueryService},
    },
    cache::CustomerCache,
    repository::{CustomerCommandRepository, CustomerQueryRepository},
    service::{CustomerCommandService, CustomerCommandServiceDeps, CustomerQueryService},
};
use shared::{abstract_trait::DynCache, config::ConnectionPool, utils::Metrics};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub customer_query: DynCustomerQueryService,
    pub customer_command: DynCustomerCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("customer_query", &"DynCustomerQueryService")
            .field("customer_command", &"DynCustomerCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub query: DynCustomerQueryRepository,
    pub command: DynCustomerCommandRepository,
    pub cache: Option<DynCache>,
    pub metrics: Metrics,
}

impl DependenciesInjectDeps {
    pub fn postgres(pool: ConnectionPool, cache: Option<DynCache>, metrics: Metrics) -> Self {
        Self {
            query: Arc::new(CustomerQueryRepository::new(pool.clone())),
            command: Arc::new(CustomerCommandRepository::new(pool)),
            cache,
            metrics,
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            query,
            command,
            cache,
            metrics,
        } = deps;

        let cache = CustomerCache::new(cache, metrics.clone());

        let customer_query = Arc::new(CustomerQueryService::new(
            query.clone(),
            cache.clone(),
            metrics.clone(),
        )) as DynCustomerQueryService;

        let customer_command = Arc::new(CustomerCommandService::new(CustomerCommandServiceDeps {
            query,
            command,
            cache,
            metrics,
        })) as DynCustomerCommandService;

        Self {
            customer_query,
            customer_command,
        }
    }
}
