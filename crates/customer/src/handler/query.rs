use crate::{
    abstract_trait::customer::service::DynCustomerQueryService,
    domain::response::customer::{CustomerData, CustomersData},
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
    utils::RequestContext,
};

fn found(ctx: &RequestContext, message: String, data: CustomerData) -> impl IntoResponse + use<> {
    (
        StatusCode::OK,
        Json(ApiResponse::new(message, ctx.elapsed(), data)),
    )
}

#[utoipa::path(
    get,
    path = "/v1/customers",
    tag = "Customer",
    responses(
        (status = 200, description = "All customers", body = ApiResponse<CustomersData>),
        (status = 500, description = "Store failure", body = ApiResponse<Empty>)
    )
)]
pub async fn get_customers(
    Extension(service): Extension<DynCustomerQueryService>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, ApiError> {
    let customers = service
        .find_all(&ctx)
        .await
        .map_err(|e| ApiError::new(&ctx, "GET customers", e))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "All customers",
            ctx.elapsed(),
            CustomersData { customers },
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/v1/customers/{id}",
    tag = "Customer",
    params(("id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer found", body = ApiResponse<CustomerData>),
        (status = 404, description = "Customer not found", body = ApiResponse<Empty>)
    )
)]
pub async fn get_customer(
    Extension(service): Extension<DynCustomerQueryService>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let customer = service
        .find_by_id(&ctx, &id)
        .await
        .map_err(|e| ApiError::new(&ctx, "GET customer", e))?;

    Ok(found(&ctx, format!("Customer by ID: {id}"), CustomerData { customer }))
}

#[utoipa::path(
    get,
    path = "/v2/customers/{id}",
    tag = "Customer",
    params(("id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer found, possibly from cache", body = ApiResponse<CustomerData>),
        (status = 404, description = "Customer not found", body = ApiResponse<Empty>)
    )
)]
pub async fn get_customer_cached(
    Extension(service): Extension<DynCustomerQueryService>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let customer = service
        .find_by_id_cached(&ctx, &id)
        .await
        .map_err(|e| ApiError::new(&ctx, "GET customer", e))?;

    Ok(found(&ctx, format!("Customer by ID: {id}"), CustomerData { customer }))
}

#[utoipa::path(
    get,
    path = "/v1/customers/email/{email}",
    tag = "Customer",
    params(("email" = String, Path, description = "Customer email")),
    responses(
        (status = 200, description = "Customer found", body = ApiResponse<CustomerData>),
        (status = 404, description = "Customer not found", body = ApiResponse<Empty>)
    )
)]
pub async fn get_customer_by_email(
    Extension(service): Extension<DynCustomerQueryService>,
    ctx: RequestContext,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let customer = service
        .find_by_email(&ctx, &email)
        .await
        .map_err(|e| ApiError::new(&ctx, "GET customer", e))?;

    Ok(found(
        &ctx,
        format!("Customer by email: {email}"),
        CustomerData { customer },
    ))
}

#[utoipa::path(
    get,
    path = "/v2/customers/email/{email}",
    tag = "Customer",
    params(("email" = String, Path, description = "Customer email")),
    responses(
        (status = 200, description = "Customer found, possibly from cache", body = ApiResponse<CustomerData>),
        (status = 404, description = "Customer not found", body = ApiResponse<Empty>)
    )
)]
pub async fn get_customer_by_email_cached(
    Extension(service): Extension<DynCustomerQueryService>,
    ctx: RequestContext,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let customer = service
        .find_by_email_cached(&ctx, &email)
        .await
        .map_err(|e| ApiError::new(&ctx, "GET customer", e))?;

    Ok(found(
        &ctx,
        format!("Customer by email: {email}"),
        CustomerData { customer },
    ))
}

#[utoipa::path(
    get,
    path = "/v1/customers/name/{name}",
    tag = "Customer",
    params(("name" = String, Path, description = "Customer first name; the earliest match is returned")),
    responses(
        (status = 200, description = "Customer found", body = ApiResponse<CustomerData>),
        (status = 404, description = "Customer not found", body = ApiResponse<Empty>)
    )
)]
pub async fn get_customer_by_name(
    Extension(service): Extension<DynCustomerQueryService>,
    ctx: RequestContext,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let customer = service
        .find_by_name(&ctx, &name)
        .await
        .map_err(|e| ApiError::new(&ctx, "GET customer", e))?;

    Ok(found(
        &ctx,
        format!("Customer by name: {name}"),
        CustomerData { customer },
    ))
}

#[utoipa::path(
    get,
    path = "/v2/customers/name/{name}",
    tag = "Customer",
    params(("name" = String, Path, description = "Customer first name; the earliest match is returned")),
    responses(
        (status = 200, description = "Customer found, possibly from cache", body = ApiResponse<CustomerData>),
        (status = 404, description = "Customer not found", body = ApiResponse<Empty>)
    )
)]
pub async fn get_customer_by_name_cached(
    Extension(service): Extension<DynCustomerQueryService>,
    ctx: RequestContext,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let customer = service
        .find_by_name_cached(&ctx, &name)
        .await
        .map_err(|e| ApiError::new(&ctx, "GET customer", e))?;

    Ok(found(
        &ctx,
        format!("Customer by name: {name}"),
        CustomerData { customer },
    ))
}
