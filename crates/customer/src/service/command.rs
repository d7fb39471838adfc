use crate::{
    abstract_trait::customer::{
        repository::{DynCustomerCommandRepository, DynCustomerQueryRepository},
        service::CustomerCommandServiceTrait,
    },
    cache::CustomerCache,
    domain::requests::customer::{CreateCustomerRequest, UpdateCustomerRequest},
    model::customer::Customer,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use shared::{
    errors::ServiceError,
    utils::{Identifier, Method, Metrics, RequestContext, Status, TracingContext, validation_messages},
};
use tracing::{info, warn};
use validator::{Validate, ValidationErrors};

const TRACER: &str = "customer-command-service";

fn invalid(errors: ValidationErrors) -> ServiceError {
    ServiceError::Validation(validation_messages(&errors))
}

/// Writes go to the database first; the cache is refreshed or evicted
/// only after the write succeeded.
#[derive(Clone)]
pub struct CustomerCommandService {
    query: DynCustomerQueryRepository,
    command: DynCustomerCommandRepository,
    cache: CustomerCache,
    metrics: Metrics,
}

pub struct CustomerCommandServiceDeps {
    pub query: DynCustomerQueryRepository,
    pub command: DynCustomerCommandRepository,
    pub cache: CustomerCache,
    pub metrics: Metrics,
}

impl CustomerCommandService {
    pub fn new(deps: CustomerCommandServiceDeps) -> Self {
        let CustomerCommandServiceDeps {
            query,
            command,
            cache,
            metrics,
        } = deps;

        Self {
            query,
            command,
            cache,
            metrics,
        }
    }

    async fn apply_update(
        &self,
        id: &str,
        req: &UpdateCustomerRequest,
    ) -> Result<Customer, ServiceError> {
        req.validate().map_err(invalid)?;

        let missing = || format!("customer {id} not found");

        // the old email and name keys must go
        let previous = if self.cache.is_enabled() {
            Some(
                self.query
                    .find_by_id(id)
                    .await
                    .map_err(|e| ServiceError::from_repository(e, missing))?,
            )
        } else {
            None
        };

        let updated = self
            .command
            .update(id, req)
            .await
            .map_err(|e| ServiceError::from_repository(e, missing))?;

        if let Some(previous) = previous {
            self.cache.evict(&previous).await;
        }
        // the renamed customer may now be the first match for its new name
        self.cache.evict_name(&updated.name).await;
        self.cache.store(&updated).await;

        Ok(updated)
    }
}

#[async_trait]
impl CustomerCommandServiceTrait for CustomerCommandService {
    async fn create(
        &self,
        ctx: &RequestContext,
        req: &CreateCustomerRequest,
    ) -> Result<String, ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🏗️ Creating customer {}", req.email);

        let tracing_ctx = TracingContext::start(
            TRACER,
            "create",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("customer.email", req.email.clone()),
            ],
        );

        let result = match req.validate() {
            Ok(()) => {
                let id = Identifier::generate().to_string();
                self.command
                    .create(&id, req)
                    .await
                    .map(|customer| customer.customer_id)
                    .map_err(ServiceError::from)
            }
            Err(errors) => Err(invalid(errors)),
        };

        let message = match &result {
            Ok(id) => format!("Customer {id} created"),
            Err(e) => e.to_string(),
        };
        tracing_ctx.finish(&self.metrics, Method::Post, Status::of(&result), &message);

        result
    }

    async fn update(
        &self,
        ctx: &RequestContext,
        id: &str,
        req: &UpdateCustomerRequest,
    ) -> Result<Customer, ServiceError> {
        info!(trace_id = %ctx.trace_id(), "✏️ Updating customer {id}");

        let tracing_ctx = TracingContext::start(
            TRACER,
            "update",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("customer.id", id.to_string()),
            ],
        );

        let result = self.apply_update(id, req).await;

        let message = match &result {
            Ok(_) => format!("Customer {id} updated"),
            Err(e) => {
                warn!(trace_id = %ctx.trace_id(), "Customer {id} not updated: {e}");
                e.to_string()
            }
        };
        tracing_ctx.finish(&self.metrics, Method::Put, Status::of(&result), &message);

        result
    }

    async fn delete(&self, ctx: &RequestContext, id: &str) -> Result<(), ServiceError> {
        info!(trace_id = %ctx.trace_id(), "🗑️ Deleting customer {id}");

        let tracing_ctx = TracingContext::start(
            TRACER,
            "delete",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("customer.id", id.to_string()),
            ],
        );

        let result = match self.command.delete(id).await {
            Ok(removed) => {
                self.cache.evict(&removed).await;
                Ok(())
            }
            Err(e) => Err(ServiceError::from_repository(e, || {
                format!("customer {id} not found")
            })),
        };

        let message = match &result {
            Ok(()) => format!("Customer {id} deleted"),
            Err(e) => e.to_string(),
        };
        tracing_ctx.finish(&self.metrics, Method::Delete, Status::of(&result), &message);

        result
    }
}
