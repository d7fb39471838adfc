use crate::config::env::EnvSource;
use anyhow::{Context, Result};
use deadpool_redis::{Config as PoolConfig, Pool, Runtime};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub db: u8,
    pub password: Option<String>,
}

impl RedisConfig {
    pub fn new(host: String, port: u16, db: u8, password: Option<String>) -> Self {
        Self {
            host,
            port,
            db,
            password,
        }
    }

    pub fn from_source(env: &EnvSource) -> Result<Self> {
        Ok(Self {
            host: env.or_default("REDIS_HOST", "redis"),
            port: env.parse_or("REDIS_PORT", 6379)?,
            db: env.parse_or("REDIS_DB", 0)?,
            password: env.optional("REDIS_PASSWORD"),
        })
    }

    pub fn url(&self) -> String {
        match &self.password {
            Some(pw) => format!("redis://:{}@{}:{}/{}", pw, self.host, self.port, self.db),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }
}

#[derive(Clone)]
pub struct RedisClient {
    pub pool: Pool,
}

impl RedisClient {
    pub fn new(config: &RedisConfig) -> Result<Self> {
        info!("Creating redis pool for {}:{}", config.host, config.port);

        let pool = PoolConfig::from_url(config.url())
            .create_pool(Some(Runtime::Tokio1))
            .context("Failed to create Redis pool")?;

        Ok(Self { pool })
    }

    pub async fn ping(&self) -> Result<()> {
        let mut conn = self
            .pool
            .get()
            .await
            .context("Failed to get Redis connection")?;

        info!("Pinging redis");

        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .context("Redis PING failed")?;

        info!("Pinged redis");

        Ok(())
    }
}
