use crate::{
    abstract_trait::product::service::DynProductCommandService,
    domain::{requests::product::ProductRequest, response::product::ProductIdData},
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
    path = "/v1/products",
    tag = "Product",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductIdData>),
        (status = 400, description = "Invalid product or duplicate name", body = ApiResponse<Empty>)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    ctx: RequestContext,
    JsonBody(body): JsonBody<ProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = service
        .create(&ctx, &body)
        .await
        .map_err(|e| ApiError::new(&ctx, "POST product", e))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Product created",
            ctx.elapsed(),
            ProductIdData { id },
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/v1/products/{id}",
    tag = "Product",
    params(("id" = String, Path, description = "Product ID")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductIdData>),
        (status = 404, description = "Product not found", body = ApiResponse<Empty>)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    ctx: RequestContext,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<ProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let product = service
        .update(&ctx, &id, &body)
        .await
        .map_err(|e| ApiError::new(&ctx, "PUT product", e))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Product updated",
            ctx.elapsed(),
            ProductIdData {
                id: product.product_id,
            },
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/v1/products/{id}",
    tag = "Product",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<Empty>),
        (status = 404, description = "Product not found", body = ApiResponse<Empty>)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    service
        .delete(&ctx, &id)
        .await
        .map_err(|e| ApiError::new(&ctx, "DELETE product", e))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Product deleted", ctx.elapsed(), Empty::default())),
    ))
}
