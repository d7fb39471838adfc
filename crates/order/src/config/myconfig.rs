use anyhow::{Result, anyhow};
use shared::config::EnvSource;
use std::{str::FromStr, time::Duration};

/// Where orders are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "postgres" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow!("ORDER_STORE must be 'postgres' or 'memory', got '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreBackend,
    pub database_url: Option<String>,
    pub run_migrations: bool,
    pub port: u16,
    pub db_max_conn: u32,
    pub db_min_conn: u32,
    pub request_timeout: Duration,
    pub otel_endpoint: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_source(&EnvSource::from_env())
    }

    pub fn from_source(env: &EnvSource) -> Result<Self> {
        let store = env
            .optional("ORDER_STORE")
            .map(|raw| raw.parse::<StoreBackend>())
            .transpose()?
            .unwrap_or(StoreBackend::Postgres);

        let database_url = match store {
            StoreBackend::Postgres => Some(env.required("DATABASE_URL")?),
            StoreBackend::Memory => env.optional("DATABASE_URL"),
        };

        Ok(Self {
            store,
            database_url,
            run_migrations: env.flag("RUN_MIGRATIONS", true)?,
            port: env.parse_required("PORT")?,
            db_max_conn: env.parse_or("DB_MAX_CONNECTION", 5)?,
            db_min_conn: env.parse_or("DB_MIN_CONNECTION", 1)?,
            request_timeout: Duration::from_millis(env.parse_or("REQUEST_TIMEOUT_MS", 5_000)?),
            otel_endpoint: env.or_default("OTEL_ENDPOINT", "http://otel-collector:4317"),
        })
    }
}
