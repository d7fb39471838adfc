use crate::{
    abstract_trait::customer::{
        repository::DynCustomerQueryRepository, service::CustomerQueryServiceTrait,
    },
    cache::{CustomerCache, email_key, id_key, name_key},
    model::customer::Customer,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, RequestContext, Status, TracingContext},
};
use tracing::info;

const TRACER: &str = "customer-query-service";

#[derive(Clone)]
pub struct CustomerQueryService {
    query: DynCustomerQueryRepository,
    cache: CustomerCache,
    metrics: Metrics,
}

impl CustomerQueryService {
    pub fn new(query: DynCustomerQueryRepository, cache: CustomerCache, metrics: Metrics) -> Self {
        Self {
            query,
            cache,
            metrics,
        }
    }

    async fn traced<T, F>(
        &self,
        operation: &str,
        attributes: Vec<KeyValue>,
        fut: F,
    ) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, ServiceError>>,
    {
        let tracing_ctx = TracingContext::start(TRACER, operation, attributes);
        let result = fut.await;

        let message = match &result {
            Ok(_) => format!("{operation} succeeded"),
            Err(e) => e.to_string(),
        };
        tracing_ctx.finish(&self.metrics, Method::Get, Status::of(&result), &message);

        result
    }

    async fn by_id(&self, id: &str) -> Result<Customer, ServiceError> {
        self.query
            .find_by_id(id)
            .await
            .map_err(|e| ServiceError::from_repository(e, || format!("customer {id} not found")))
    }

    async fn by_email(&self, email: &str) -> Result<Customer, ServiceError> {
        self.query.find_by_email(email).await.map_err(|e| {
            ServiceError::from_repository(e, || format!("customer with email {email} not found"))
        })
    }

    async fn by_name(&self, name: &str) -> Result<Customer, ServiceError> {
        self.query.find_by_name(name).await.map_err(|e| {
            ServiceError::from_repository(e, || format!("customer named {name} not found"))
        })
    }

    async fn read_through_name(&self, name: &str) -> Result<Customer, ServiceError> {
        if let Some(customer) = self.cache.read(&name_key(name)).await {
            return Ok(customer);
        }

        let customer = self.by_name(name).await?;
        self.cache.store_by_name(name, &customer).await;
        Ok(customer)
    }

    /// Serves `key` from the cache, or loads through `load` and fills the
    /// cache on the way out.
    async fn read_through<F>(&self, key: String, load: F) -> Result<Customer, ServiceError>
    where
        F: Future<Output = Result<Customer, ServiceError>>,
    {
        if let Some(customer) = self.cache.read(&key).await {
            return Ok(customer);
        }

        let customer = load.await?;
        self.cache.store(&customer).await;
        Ok(customer)
    }
}

#[async_trait]
impl CustomerQueryServiceTrait for CustomerQueryService {
    async fn find_all(&self, ctx: &RequestContext) -> Result<Vec<Customer>, ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🔍 Listing customers");

        self.traced(
            "find_all",
            vec![KeyValue::new("component", "customer")],
            async { self.query.find_all().await.map_err(ServiceError::from) },
        )
        .await
    }

    async fn find_by_id(&self, ctx: &RequestContext, id: &str) -> Result<Customer, ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🔍 Finding customer {id}");

        self.traced(
            "find_by_id",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("customer.id", id.to_string()),
            ],
            self.by_id(id),
        )
        .await
    }

    async fn find_by_id_cached(
        &self,
        ctx: &RequestContext,
        id: &str,
    ) -> Result<Customer, ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🔍 Finding customer {id} (cached)");

        self.traced(
            "find_by_id_cached",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("customer.id", id.to_string()),
                KeyValue::new("cache.enabled", self.cache.is_enabled()),
            ],
            self.read_through(id_key(id), self.by_id(id)),
        )
        .await
    }

    async fn find_by_email(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> Result<Customer, ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🔍 Finding customer by email {email}");

        self.traced(
            "find_by_email",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("customer.email", email.to_string()),
            ],
            self.by_email(email),
        )
        .await
    }

    async fn find_by_email_cached(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> Result<Customer, ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🔍 Finding customer by email {email} (cached)");

        self.traced(
            "find_by_email_cached",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("customer.email", email.to_string()),
                KeyValue::new("cache.enabled", self.cache.is_enabled()),
            ],
            self.read_through(email_key(email), self.by_email(email)),
        )
        .await
    }

    async fn find_by_name(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<Customer, ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🔍 Finding customer named {name}");

        self.traced(
            "find_by_name",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("customer.name", name.to_string()),
            ],
            self.by_name(name),
        )
        .await
    }

    async fn find_by_name_cached(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<Customer, ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🔍 Finding customer named {name} (cached)");

        self.traced(
            "find_by_name_cached",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("customer.name", name.to_string()),
                KeyValue::new("cache.enabled", self.cache.is_enabled()),
            ],
            self.read_through_name(name),
        )
        .await
    }
}
