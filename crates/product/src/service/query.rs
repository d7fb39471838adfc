use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    model::product::Product,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, RequestContext, Status, TracingContext},
};
use tracing::info;

const TRACER: &str = "product-query-service";

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, metrics: Metrics) -> Self {
        Self { query, metrics }
    }

    fn finish<T>(&self, tracing_ctx: TracingContext, result: &Result<T, ServiceError>) {
        let message = match result {
            Ok(_) => format!("{} succeeded", tracing_ctx.operation()),
            Err(e) => e.to_string(),
        };
        tracing_ctx.finish(&self.metrics, Method::Get, Status::of(result), &message);
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self, ctx: &RequestContext) -> Result<Vec<Product>, ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🔍 Listing products");

        let tracing_ctx = TracingContext::start(
            TRACER,
            "find_all",
            vec![KeyValue::new("component", "product")],
        );

        let result = self.query.find_all().await.map_err(ServiceError::from);
        self.finish(tracing_ctx, &result);
        result
    }

    async fn find_by_id(&self, ctx: &RequestContext, id: &str) -> Result<Product, ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🔍 Finding product {id}");

        let tracing_ctx = TracingContext::start(
            TRACER,
            "find_by_id",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        let result = self
            .query
            .find_by_id(id)
            .await
            .map_err(|e| ServiceError::from_repository(e, || format!("product {id} not found")));
        self.finish(tracing_ctx, &result);
        result
    }

    async fn find_by_name(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<Product, ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🔍 Finding product named {name}");

        let tracing_ctx = TracingContext::start(
            TRACER,
            "find_by_name",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.name", name.to_string()),
            ],
        );

        let result = self
            .query
            .find_by_name(name)
            .await
            .map_err(|e| ServiceError::from_repository(e, || format!("product {name} not found")));
        self.finish(tracing_ctx, &result);
        result
    }
}
