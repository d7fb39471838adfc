mod command;
mod query;

pub use self::command::{
    __path_create_customer, __path_delete_customer, __path_update_customer, create_customer,
    delete_customer, update_customer,
};
pub use self::query::{
    __path_get_customer, __path_get_customer_by_email, __path_get_customer_by_email_cached,
    __path_get_customer_by_name, __path_get_customer_by_name_cached, __path_get_customer_cached,
    __path_get_customers, get_customer, get_customer_by_email, get_customer_by_email_cached,
    get_customer_by_name, get_customer_by_name_cached, get_customer_cached, get_customers,
};

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::Extension,
    middleware,
    routing::get,
};
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
        get_customers,
        get_customer,
        get_customer_cached,
        get_customer_by_email,
        get_customer_by_email_cached,
        get_customer_by_name,
        get_customer_by_name_cached,
        create_customer,
        update_customer,
        delete_customer,
    ),
    tags(
        (name = "Customer", description = "Customer endpoints"),
    )
)]
struct ApiDoc;

pub fn customer_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/v1/customers", get(get_customers).post(create_customer))
        .route(
            "/v1/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/v2/customers/{id}", get(get_customer_cached))
        .route("/v1/customers/email/{email}", get(get_customer_by_email))
        .route(
            "/v2/customers/email/{email}",
            get(get_customer_by_email_cached),
        )
        .route("/v1/customers/name/{name}", get(get_customer_by_name))
        .route("/v2/customers/name/{name}", get(get_customer_by_name_cached))
        .layer(Extension(app_state.di_container.customer_query.clone()))
        .layer(Extension(app_state.di_container.customer_command.clone()))
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(state: Arc<AppState>) -> Router {
        let metrics_router = OpenApiRouter::new()
            .route("/metrics", get(metrics_handler))
            .with_state(state.registry.clone());

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(customer_routes(state.clone()))
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

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server failed")?;

        Ok(())
    }
}
