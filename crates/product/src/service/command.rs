use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::requests::product::ProductRequest,
    model::product::Product,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use shared::{
    errors::ServiceError,
    utils::{Identifier, Method, Metrics, RequestContext, Status, TracingContext, validation_messages},
};
use tracing::info;
use validator::Validate;

const TRACER: &str = "product-command-service";

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, metrics: Metrics) -> Self {
        Self { command, metrics }
    }

    fn validate(req: &ProductRequest) -> Result<(), ServiceError> {
        req.validate()
            .map_err(|errors| ServiceError::Validation(validation_messages(&errors)))
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create(
        &self,
        ctx: &RequestContext,
        req: &ProductRequest,
    ) -> Result<String, ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🏗️ Creating product {}", req.name);

        let tracing_ctx = TracingContext::start(
            TRACER,
            "create",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.name", req.name.clone()),
            ],
        );

        let result = match Self::validate(req) {
            Ok(()) => {
                let id = Identifier::generate().to_string();
                self.command
                    .create(&id, req)
                    .await
                    .map(|product| product.product_id)
                    .map_err(ServiceError::from)
            }
            Err(e) => Err(e),
        };

        let message = match &result {
            Ok(id) => format!("Product {id} created"),
            Err(e) => e.to_string(),
        };
        tracing_ctx.finish(&self.metrics, Method::Post, Status::of(&result), &message);

        result
    }

    async fn update(
        &self,
        ctx: &RequestContext,
        id: &str,
        req: &ProductRequest,
    ) -> Result<Product, ServiceError> {
        info!(trace_id = %ctx.trace_id(), "✏️ Updating product {id}");

        let tracing_ctx = TracingContext::start(
            TRACER,
            "update",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        let result = match Self::validate(req) {
            Ok(()) => self.command.update(id, req).await.map_err(|e| {
                ServiceError::from_repository(e, || format!("product {id} not found"))
            }),
            Err(e) => Err(e),
        };

        let message = match &result {
            Ok(_) => format!("Product {id} updated"),
            Err(e) => e.to_string(),
        };
        tracing_ctx.finish(&self.metrics, Method::Put, Status::of(&result), &message);

        result
    }

    async fn delete(&self, ctx: &RequestContext, id: &str) -> Result<(), ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🗑️ Deleting product {id}");

        let tracing_ctx = TracingContext::start(
            TRACER,
            "delete",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        let result =
            self.command.delete(id).await.map_err(|e| {
                ServiceError::from_repository(e, || format!("product {id} not found"))
            });

        let message = match &result {
            Ok(()) => format!("Product {id} deleted"),
            Err(e) => e.to_string(),
        };
        tracing_ctx.finish(&self.metrics, Method::Delete, Status::of(&result), &message);

        result
    }
}
