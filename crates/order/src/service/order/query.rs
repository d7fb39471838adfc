use crate::{
    abstract_trait::order::{repository::DynOrderQueryRepository, service::OrderQueryServiceTrait},
    model::order::Order,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use shared::{
    errors::ServiceError,
    utils::{Identifier, Method, Metrics, RequestContext, Status, TracingContext},
};
use tracing::info;

const TRACER: &str = "order-query-service";

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    metrics: Metrics,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository, metrics: Metrics) -> Self {
        Self { query, metrics }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_by_id(&self, ctx: &RequestContext, id: &str) -> Result<Order, ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🔍 Finding order {id}");

        let tracing_ctx = TracingContext::start(
            TRACER,
            "find_by_id",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("order.id", id.to_string()),
            ],
        );

        let missing = || format!("order {id} not found");

        // a malformed id cannot name any stored order
        let result = match id.parse::<Identifier>() {
            Ok(order_id) => {
                ctx.run(async {
                    self.query
                        .find_by_id(&order_id)
                        .await
                        .map_err(|e| ServiceError::from_repository(e, missing))
                })
                .await
            }
            Err(_) => Err(ServiceError::NotFound(missing())),
        };

        let message = match &result {
            Ok(order) => format!("Order {} found", order.id),
            Err(e) => e.to_string(),
        };
        tracing_ctx.finish(&self.metrics, Method::Get, Status::of(&result), &message);

        result
    }

    async fn find_by_customer_id(
        &self,
        ctx: &RequestContext,
        customer_id: &str,
    ) -> Result<Vec<Order>, ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🔍 Listing orders of customer {customer_id}");

        let tracing_ctx = TracingContext::start(
            TRACER,
            "find_by_customer_id",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("customer.id", customer_id.to_string()),
            ],
        );

        let result = ctx
            .run(async {
                self.query
                    .find_by_customer_id(customer_id)
                    .await
                    .map_err(ServiceError::from)
            })
            .await;

        let message = match &result {
            Ok(orders) => format!("{} order(s) for customer {customer_id}", orders.len()),
            Err(e) => e.to_string(),
        };
        tracing_ctx.finish(&self.metrics, Method::Get, Status::of(&result), &message);

        result
    }
}
