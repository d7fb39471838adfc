mod command;
mod query;

pub use self::command::{__path_create_order, __path_delete_order, create_order, delete_order};
pub use self::query::{
    __path_get_order, __path_get_orders_by_customer, get_order, get_orders_by_customer,
};

use crate::state::AppState;
use axum::{
    extract::Extension,
    routing::{get, post},
};
use shared::middleware::RequestTimeout;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/v1/orders", post(create_order))
        .route("/v1/orders/{id}", get(get_order).delete(delete_order))
        .route(
            "/v1/orders/customers/{customer_id}",
            get(get_orders_by_customer),
        )
        .layer(Extension(app_state.di_container.order_command.clone()))
        .layer(Extension(app_state.di_container.order_query.clone()))
        .layer(Extension(RequestTimeout(app_state.request_timeout)))
}
