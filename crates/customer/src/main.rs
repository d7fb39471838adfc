use anyhow::{Context, Result};
use customer::{config::Config, handler::AppRouter, state::AppState};
use shared::{
    abstract_trait::DynCache,
    cache::CacheStore,
    config::{ConnectionManager, ConnectionPool, RedisClient},
    utils::{Telemetry, init_logger, shutdown_signal},
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, state, telemetry) = setup().await.context("Failed to setup application")?;

    let served = AppRouter::serve(config.port, state, shutdown_signal()).await;
    if let Err(e) = &served {
        error!("❌ Server stopped with error: {e:#}");
    }

    shutdown(telemetry).await;

    served
}

async fn setup() -> Result<(Config, Arc<AppState>, Telemetry)> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let config = Config::init().context("Failed to load configuration")?;

    let mut telemetry = Telemetry::new("customer-service", config.otel_endpoint.clone());
    let logger_provider = telemetry.init_logger()?;
    telemetry.init_meter()?;
    telemetry.init_tracer()?;

    init_logger(logger_provider, "customer-service", is_dev, is_enable_file);

    let pool = connect_database(&config).await?;
    let cache = connect_cache(&config).await?;

    let state = Arc::new(AppState::new(pool, cache));

    info!("✅ Application setup completed successfully.");
    Ok((config, state, telemetry))
}

async fn connect_database(config: &Config) -> Result<ConnectionPool> {
    let pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("failed to migration database")?;
        info!("✅ Migrations applied");
    }

    Ok(pool)
}

async fn connect_cache(config: &Config) -> Result<Option<DynCache>> {
    if !config.cache_enabled {
        warn!("⚠️ Customer cache disabled, v2 lookups go straight to the database");
        return Ok(None);
    }

    let redis = RedisClient::new(&config.redis).context("Failed to connect to Redis")?;
    redis.ping().await.context("Failed to ping Redis")?;

    Ok(Some(Arc::new(CacheStore::new(redis.pool))))
}

async fn shutdown(telemetry: Telemetry) {
    info!("🛑 Shutting down customer-service...");

    if let Err(e) = telemetry.shutdown().await {
        error!("Failed to shutdown telemetry: {}", e);
    }

    info!("✅ Customer service shutdown complete.");
}
