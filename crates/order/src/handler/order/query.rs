use crate::{
    abstract_trait::order::service::DynOrderQueryService,
    domain::response::order::{OrderData, OrdersData},
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};
use shared::{
    domain::responses::{ApiResponse, Empty},
    errors::{ApiError, HttpError},
    utils::RequestContext,
};

#[utoipa::path(
    get,
    path = "/v1/orders/{id}",
    tag = "Order",
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order found", body = ApiResponse<OrderData>),
        (status = 404, description = "Order not found", body = ApiResponse<Empty>)
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let order = service
        .find_by_id(&ctx, &id)
        .await
        .map_err(|e| ApiError::new(&ctx, "GET order", e))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            format!("Order by ID: {id}"),
            ctx.elapsed(),
            OrderData { order },
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/v1/orders/customers/{customer_id}",
    tag = "Order",
    params(("customer_id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Orders of the customer, possibly none", body = ApiResponse<OrdersData>),
        (status = 404, description = "Orders could not be read", body = ApiResponse<Empty>)
    )
)]
pub async fn get_orders_by_customer(
    Extension(service): Extension<DynOrderQueryService>,
    ctx: RequestContext,
    Path(customer_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let orders = service
        .find_by_customer_id(&ctx, &customer_id)
        .await
        .map_err(|e| ApiError::new(&ctx, "GET orders", HttpError::NotFound(e.to_string())))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            format!("Orders by customer ID: {customer_id}"),
            ctx.elapsed(),
            OrdersData { orders },
        )),
    ))
}
