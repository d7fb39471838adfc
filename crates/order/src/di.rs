use crate::{
    abstract_trait::{
        http_client::{DynCustomerClient, DynProductClient},
        order::{
            repository::{DynOrderCommandRepository, DynOrderQueryRepository},
            service::{DynOrderCommandService, DynOrderQueryService},
        },
    },
    http_client::HttpClients,
    repository::{
        memory::InMemoryOrderStore,
        order::{OrderCommandRepository, OrderQueryRepository},
    },
    service::order::{OrderCommandService, OrderCommandServiceDeps, OrderQueryService},
};
use shared::{config::ConnectionPool, utils::Metrics};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_query", &"OrderQueryService")
            .field("order_command", &"OrderCommandService")
            .finish()
    }
}

/// Everything the order services are built from.
#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub customer_client: DynCustomerClient,
    pub product_client: DynProductClient,
    pub command: DynOrderCommandRepository,
    pub query: DynOrderQueryRepository,
    pub metrics: Metrics,
}

impl DependenciesInjectDeps {
    pub fn postgres(pool: ConnectionPool, clients: HttpClients, metrics: Metrics) -> Self {
        Self {
            customer_client: Arc::new(clients.customer),
            product_client: Arc::new(clients.product),
            command: Arc::new(OrderCommandRepository::new(pool.clone())),
            query: Arc::new(OrderQueryRepository::new(pool)),
            metrics,
        }
    }

    pub fn in_memory(store: InMemoryOrderStore, clients: HttpClients, metrics: Metrics) -> Self {
        Self {
            customer_client: Arc::new(clients.customer),
            product_client: Arc::new(clients.product),
            command: Arc::new(store.clone()),
            query: Arc::new(store),
            metrics,
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            customer_client,
            product_client,
            command,
            query,
            metrics,
        } = deps;

        let order_query = Arc::new(OrderQueryService::new(query, metrics.clone()));

        let order_command = Arc::new(OrderCommandService::new(OrderCommandServiceDeps {
            customer_client,
            product_client,
            command,
            metrics,
        }));

        Self {
            order_query,
            order_command,
        }
    }
}
