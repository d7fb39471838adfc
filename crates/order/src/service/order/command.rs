use crate::{
    abstract_trait::{
        http_client::{DynCustomerClient, DynProductClient},
        order::{repository::DynOrderCommandRepository, service::OrderCommandServiceTrait},
    },
    domain::requests::order::{CreateOrderItemRequest, CreateOrderRequest},
    model::order::{CustomerSnapshot, Order, ProductSnapshot},
};
use async_trait::async_trait;
use chrono::Utc;
use opentelemetry::KeyValue;
use shared::{
    errors::ServiceError,
    utils::{
        Identifier, Method, Metrics, RequestContext, Resource, Status, TracingContext,
        validation_messages,
    },
};
use tokio::time::Instant;
use tracing::{error, info, warn};
use validator::Validate;

const TRACER: &str = "order-command-service";

/// Creates and deletes orders.
///
/// Creation resolves the customer, then every product line in request
/// order, and only then writes the assembled document. The first failure
/// aborts the whole request; nothing is written and nothing is undone.
#[derive(Clone)]
pub struct OrderCommandService {
    customer_client: DynCustomerClient,
    product_client: DynProductClient,
    command: DynOrderCommandRepository,
    metrics: Metrics,
}

pub struct OrderCommandServiceDeps {
    pub customer_client: DynCustomerClient,
    pub product_client: DynProductClient,
    pub command: DynOrderCommandRepository,
    pub metrics: Metrics,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps) -> Self {
        let OrderCommandServiceDeps {
            customer_client,
            product_client,
            command,
            metrics,
        } = deps;

        Self {
            customer_client,
            product_client,
            command,
            metrics,
        }
    }

    fn validate(req: &CreateOrderRequest) -> Result<(), ServiceError> {
        req.validate()
            .map_err(|errors| ServiceError::Validation(validation_messages(&errors)))
    }

    async fn resolve_customer(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> Result<CustomerSnapshot, ServiceError> {
        ctx.run(self.customer_client.find_by_email(ctx, email))
            .await
            .inspect_err(|e| {
                warn!(trace_id = %ctx.trace_id(), "Customer {email} could not be resolved: {e}");
            })
    }

    async fn resolve_products(
        &self,
        ctx: &RequestContext,
        items: &[CreateOrderItemRequest],
    ) -> Result<Vec<ProductSnapshot>, ServiceError> {
        let mut products = Vec::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            let details = ctx
                .run(self.product_client.find_by_name(ctx, &item.name))
                .await
                .inspect_err(|e| {
                    warn!(
                        trace_id = %ctx.trace_id(),
                        "Product #{position} ({}) could not be resolved: {e}",
                        item.name
                    );
                })?;

            products.push(ProductSnapshot::ordered(details, item.quantity));
        }

        Ok(products)
    }

    async fn persist(&self, ctx: &RequestContext, order: &Order) -> Result<(), ServiceError> {
        let start = Instant::now();
        // a failed insert is a store fault whatever the cause
        let result = ctx
            .run(async {
                self.command
                    .insert(order)
                    .await
                    .map_err(ServiceError::Persistence)
            })
            .await;

        self.metrics.record_external(
            Resource::Database,
            "insert",
            Status::of(&result),
            start.elapsed().as_secs_f64(),
        );

        result
    }

    async fn create(
        &self,
        ctx: &RequestContext,
        req: &CreateOrderRequest,
    ) -> Result<Identifier, ServiceError> {
        Self::validate(req)?;

        let customer = self.resolve_customer(ctx, &req.customer_email).await?;
        let products = self.resolve_products(ctx, &req.products).await?;

        let order = Order::new(Identifier::generate(), customer, products, Utc::now());

        ctx.ensure_active()?;
        self.persist(ctx, &order).await?;

        Ok(order.id)
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        ctx: &RequestContext,
        req: &CreateOrderRequest,
    ) -> Result<Identifier, ServiceError> {
        info!(
            trace_id = %ctx.trace_id(),
            "🏗️ Creating order for {} with {} product line(s)",
            req.customer_email,
            req.products.len()
        );

        let tracing_ctx = TracingContext::start(
            TRACER,
            "create_order",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "create"),
                KeyValue::new("customer.email", req.customer_email.clone()),
                KeyValue::new("order.lines", req.products.len() as i64),
                KeyValue::new("trace_id", ctx.trace_id().to_string()),
            ],
        );
        let ctx = ctx.with_span_context(tracing_ctx.cx.clone());

        let result = self.create(&ctx, req).await;

        match &result {
            Ok(id) => tracing_ctx.finish(
                &self.metrics,
                Method::Post,
                Status::Success,
                &format!("Order {id} created"),
            ),
            Err(e) => {
                error!(trace_id = %ctx.trace_id(), "❌ Order creation aborted: {e}");
                tracing_ctx.finish(&self.metrics, Method::Post, Status::Error, &e.to_string());
            }
        }

        result
    }

    async fn delete_order(&self, ctx: &RequestContext, id: &str) -> Result<(), ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🗑️ Deleting order {id}");

        let tracing_ctx = TracingContext::start(
            TRACER,
            "delete_order",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("order.id", id.to_string()),
            ],
        );

        let missing = || format!("order {id} not found");

        let result = match id.parse::<Identifier>() {
            Ok(order_id) => {
                ctx.run(async {
                    self.command
                        .delete_by_id(&order_id)
                        .await
                        .map_err(|e| ServiceError::from_repository(e, missing))
                })
                .await
            }
            Err(_) => Err(ServiceError::NotFound(missing())),
        };

        let message = match &result {
            Ok(()) => format!("Order {id} deleted"),
            Err(e) => e.to_string(),
        };
        tracing_ctx.finish(&self.metrics, Method::Delete, Status::of(&result), &message);

        result
    }
}
