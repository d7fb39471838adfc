use crate::{
    abstract_trait::order::service::DynOrderCommandService,
    domain::{requests::order::CreateOrderRequest, response::order::CreatedOrderData},
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
    middleware::JsonBody,
    utils::RequestContext,
};

#[utoipa::path(
    post,
    path = "/v1/orders",
    tag = "Order",
    request_body = CreateOrderRequest,
    params(("X-Trace-ID" = Option<String>, Header, description = "Trace id propagated to collaborators")),
    responses(
        (status = 201, description = "Order created", body = ApiResponse<CreatedOrderData>),
        (status = 400, description = "Invalid request or unresolvable customer/product", body = ApiResponse<Empty>),
        (status = 500, description = "Order could not be stored", body = ApiResponse<Empty>),
        (status = 503, description = "Request deadline exceeded", body = ApiResponse<Empty>)
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    ctx: RequestContext,
    JsonBody(body): JsonBody<CreateOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = service
        .create_order(&ctx, &body)
        .await
        .map_err(|e| ApiError::new(&ctx, "POST order", HttpError::from_reference(e)))?;

    let data = CreatedOrderData { id: id.to_string() };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Order created", ctx.elapsed(), data)),
    ))
}

#[utoipa::path(
    delete,
    path = "/v1/orders/{id}",
    tag = "Order",
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted", body = ApiResponse<Empty>),
        (status = 404, description = "Order not found", body = ApiResponse<Empty>)
    )
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderCommandService>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    service
        .delete_order(&ctx, &id)
        .await
        .map_err(|e| ApiError::new(&ctx, "DELETE order", e))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Order deleted", ctx.elapsed(), Empty::default())),
    ))
}
