use crate::{
    abstract_trait::product::service::DynProductQueryService,
    domain::response::product::{ProductData, ProductsData},
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

#[utoipa::path(
    get,
    path = "/v1/products",
    tag = "Product",
    responses(
        (status = 200, description = "All products", body = ApiResponse<ProductsData>)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, ApiError> {
    let products = service
        .find_all(&ctx)
        .await
        .map_err(|e| ApiError::new(&ctx, "GET products", e))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "All products",
            ctx.elapsed(),
            ProductsData { products },
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/v1/products/{id}",
    tag = "Product",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductData>),
        (status = 404, description = "Product not found", body = ApiResponse<Empty>)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product = service
        .find_by_id(&ctx, &id)
        .await
        .map_err(|e| ApiError::new(&ctx, "GET product", e))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            format!("Product by ID: {id}"),
            ctx.elapsed(),
            ProductData { product },
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/v1/products/name/{name}",
    tag = "Product",
    params(("name" = String, Path, description = "Exact product name")),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductData>),
        (status = 404, description = "Product not found", body = ApiResponse<Empty>)
    )
)]
pub async fn get_product_by_name(
    Extension(service): Extension<DynProductQueryService>,
    ctx: RequestContext,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product = service
        .find_by_name(&ctx, &name)
        .await
        .map_err(|e| ApiError::new(&ctx, "GET product", e))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            format!("Product by name: {name}"),
            ctx.elapsed(),
            ProductData { product },
        )),
    ))
}
