mod command;
mod query;

pub use self::command::{
    __path_create_product, __path_delete_product, __path_update_product, create_product,
    delete_product, update_product,
};
pub use self::query::{
    __path_get_product, __path_get_product_by_name, __path_get_products, get_product,
    get_product_by_name, get_products,
};

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{Router, extract::Extension, middleware, routing::get};
use shared::middleware::{metrics_handler, track_metrics};
use std::{future::Future, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        get_products,
        get_product,
        get_product_by_name,
        create_product,
        update_product,
        delete_product,
    ),
    tags(
        (name = "Product", description = "Product catalog endpoints"),
    )
)]
struct ApiDoc;

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/v1/products", get(get_products).post(create_product))
        .route(
            "/v1/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/v1/products/name/{name}", get(get_product_by_name))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(state: Arc<AppState>) -> Router {
        let metrics_router = OpenApiRouter::new()
            .route("/metrics", get(metrics_handler))
            .with_state(state.registry.clone());

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(product_routes(state.clone()))
            .route_layer(middleware::from_fn_with_state(
                state.metrics.clone(),
                track_metrics,
            ))
            .merge(metrics_router)
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(1024 * 1024));

        let (app_router, api) = api_router.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve<F>(port: u16, state: Arc<AppState>, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = Self::build(state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server failed")?;

        Ok(())
    }
}
