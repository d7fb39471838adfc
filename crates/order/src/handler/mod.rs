mod order;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{Router, middleware, routing::get};
use shared::middleware::{metrics_handler, track_metrics};
use std::{future::Future, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::order::order_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        order::create_order,
        order::get_order,
        order::get_orders_by_customer,
        order::delete_order,
    ),
    tags(
        (name = "Order", description = "Order endpoints"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub fn build(state: Arc<AppState>) -> Router {
        let metrics_router = OpenApiRouter::new()
            .route("/metrics", get(metrics_handler))
            .with_state(state.registry.clone());

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(order_routes(state.clone()))
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
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server failed")?;

        Ok(())
    }
}
