use crate::{
    abstract_trait::customer::service::DynCustomerCommandService,
    domain::{
        requests::customer::{CreateCustomerRequest, UpdateCustomerRequest},
        response::customer::CustomerIdData,
    },
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};
use shared::{
    domain::responses::{ApiResponse, Empty},
    errors::ApiError,
    middleware::JsonBody,
    utils::RequestContext,
};

#[utoipa::path(
    post,
    path = "/v1/customers",
    tag = "Customer",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = ApiResponse<CustomerIdData>),
        (status = 400, description = "Invalid customer or duplicate email", body = ApiResponse<Empty>)
    )
)]
pub async fn create_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    ctx: RequestContext,
    JsonBody(body): JsonBody<CreateCustomerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = service
        .create(&ctx, &body)
        .await
        .map_err(|e| ApiError::new(&ctx, "POST customer", e))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Customer created",
            ctx.elapsed(),
            CustomerIdData { id },
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/v1/customers/{id}",
    tag = "Customer",
    params(("id" = String, Path, description = "Customer ID")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = ApiResponse<CustomerIdData>),
        (status = 400, description = "Invalid customer", body = ApiResponse<Empty>),
        (status = 404, description = "Customer not found", body = ApiResponse<Empty>)
    )
)]
pub async fn update_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    ctx: RequestContext,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<UpdateCustomerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let customer = service
        .update(&ctx, &id, &body)
        .await
        .map_err(|e| ApiError::new(&ctx, "PUT customer", e))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Customer updated",
            ctx.elapsed(),
            CustomerIdData {
                id: customer.customer_id,
            },
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/v1/customers/{id}",
    tag = "Customer",
    params(("id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deleted", body = ApiResponse<Empty>),
        (status = 404, description = "Customer not found", body = ApiResponse<Empty>)
    )
)]
pub async fn delete_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    service
        .delete(&ctx, &id)
        .await
        .map_err(|e| ApiError::new(&ctx, "DELETE customer", e))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Customer deleted", ctx.elapsed(), Empty::default())),
    ))
}
