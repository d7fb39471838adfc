#![allow(dead_code)]

use async_trait::async_trait;
use order::{
    abstract_trait::{
        http_client::{CustomerClientTrait, ProductClientTrait},
        order::repository::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
    },
    di::{DependenciesInject, DependenciesInjectDeps},
    model::order::{CustomerSnapshot, Order, ProductDetails},
    repository::memory::InMemoryOrderStore,
};
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Identifier, Metrics, RequestContext},
};
use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

pub fn ctx() -> RequestContext {
    RequestContext::new(Identifier::generate().to_string())
}

#[derive(Clone)]
pub enum Upstream<T> {
    Found(T),
    Unavailable,
}

/// Customer directory with call counting and an optional delay.
#[derive(Clone, Default)]
pub struct FakeCustomers {
    records: Arc<Mutex<HashMap<String, Upstream<CustomerSnapshot>>>>,
    calls: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl FakeCustomers {
    pub fn with(self, email: &str, id: &str, name: &str) -> Self {
        self.records.lock().unwrap().insert(
            email.to_string(),
            Upstream::Found(CustomerSnapshot {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
            }),
        );
        self
    }

    pub fn unavailable(self, email: &str) -> Self {
        self.records
            .lock()
            .unwrap()
            .insert(email.to_string(), Upstream::Unavailable);
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn rename(&self, email: &str, name: &str) {
        if let Some(Upstream::Found(customer)) = self.records.lock().unwrap().get_mut(email) {
            customer.name = name.to_string();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CustomerClientTrait for FakeCustomers {
    async fn find_by_email(
        &self,
        _ctx: &RequestContext,
        email: &str,
    ) -> Result<CustomerSnapshot, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let record = self.records.lock().unwrap().get(email).cloned();
        match record {
            Some(Upstream::Found(customer)) => Ok(customer),
            Some(Upstream::Unavailable) => Err(ServiceError::UpstreamUnavailable(
                format!("customer {email}: customer-service answered 500 Internal Server Error"),
            )),
            None => Err(ServiceError::NotFound(format!(
                "customer with email {email} not found"
            ))),
        }
    }
}

/// Product catalog with per-name call log and an optional delay.
#[derive(Clone, Default)]
pub struct FakeProducts {
    records: Arc<Mutex<HashMap<String, Upstream<ProductDetails>>>>,
    lookups: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
}

impl FakeProducts {
    pub fn with(self, name: &str, id: &str, price: f64) -> Self {
        self.records.lock().unwrap().insert(
            name.to_string(),
            Upstream::Found(ProductDetails {
                id: id.to_string(),
                name: name.to_string(),
                description: format!("{name} description"),
                price,
            }),
        );
        self
    }

    pub fn unavailable(self, name: &str) -> Self {
        self.records
            .lock()
            .unwrap()
            .insert(name.to_string(), Upstream::Unavailable);
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn reprice(&self, name: &str, price: f64) {
        if let Some(Upstream::Found(product)) = self.records.lock().unwrap().get_mut(name) {
            product.price = price;
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductClientTrait for FakeProducts {
    async fn find_by_name(
        &self,
        _ctx: &RequestContext,
        name: &str,
    ) -> Result<ProductDetails, ServiceError> {
        self.lookups.lock().unwrap().push(name.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let record = self.records.lock().unwrap().get(name).cloned();
        match record {
            Some(Upstream::Found(product)) => Ok(product),
            Some(Upstream::Unavailable) => Err(ServiceError::UpstreamUnavailable(
                format!("product {name}: product-service answered 503 Service Unavailable"),
            )),
            None => Err(ServiceError::NotFound(format!("product {name} not found"))),
        }
    }
}

/// Command store that refuses every write.
/// Command store whose writes always fail.
#[derive(Clone, Copy)]
pub enum BrokenStore {
    Reset,
    Conflict,
}

#[async_trait]
impl OrderCommandRepositoryTrait for BrokenStore {
    async fn insert(&self, order: &Order) -> Result<(), RepositoryError> {
        match self {
            BrokenStore::Reset => Err(RepositoryError::Custom("connection reset".into())),
            BrokenStore::Conflict => Err(RepositoryError::AlreadyExists(format!(
                "order {}",
                order.id
            ))),
        }
    }

    async fn delete_by_id(&self, _id: &Identifier) -> Result<(), RepositoryError> {
        Err(RepositoryError::Custom("connection reset".into()))
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for BrokenStore {
    async fn find_by_id(&self, _id: &Identifier) -> Result<Order, RepositoryError> {
        Err(RepositoryError::Custom("connection reset".into()))
    }

    async fn find_by_customer_id(&self, _customer_id: &str) -> Result<Vec<Order>, RepositoryError> {
        Err(RepositoryError::Custom("connection reset".into()))
    }
}

pub struct Harness {
    pub customers: FakeCustomers,
    pub products: FakeProducts,
    pub store: InMemoryOrderStore,
    pub container: DependenciesInject,
}

pub fn harness(customers: FakeCustomers, products: FakeProducts) -> Harness {
    let store = InMemoryOrderStore::new();

    let container = DependenciesInject::new(DependenciesInjectDeps {
        customer_client: Arc::new(customers.clone()),
        product_client: Arc::new(products.clone()),
        command: Arc::new(store.clone()),
        query: Arc::new(store.clone()),
        metrics: Metrics::new(),
    });

    Harness {
        customers,
        products,
        store,
        container,
    }
}

/// Ada (c1) plus a small catalog.
pub fn standard() -> Harness {
    harness(
        FakeCustomers::default().with("a@x.com", "c1", "Ada"),
        FakeProducts::default()
            .with("Widget", "p1", 10.0)
            .with("Gadget", "p2", 25.5)
            .with("Gizmo", "p3", 3.0),
    )
}
