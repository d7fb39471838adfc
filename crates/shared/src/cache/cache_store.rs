use crate::abstract_trait::CacheTrait;
use async_trait::async_trait;
use deadpool_redis::{Connection, Pool};
use tracing::{debug, error, warn};

/// Redis-backed cache. Entries are written without expiry.
#[derive(Clone)]
pub struct CacheStore {
    redis_pool: Pool,
}

impl CacheStore {
    pub fn new(redis_pool: Pool) -> Self {
        Self { redis_pool }
    }

    async fn get_conn(&self) -> Option<Connection> {
        match self.redis_pool.get().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                error!("Failed to get Redis pooled connection: {:?}", e);
                None
            }
        }
    }
}

#[async_trait]
impl CacheTrait for CacheStore {
    async fn read(&self, key: &str) -> Option<String> {
        let mut conn = self.get_conn().await?;
        let result: redis::RedisResult<Option<String>> =
            redis::cmd("GET").arg(key).query_async(&mut conn).await;

        match result {
            Ok(Some(data)) => {
                debug!("Cache hit for key: {key}");
                Some(data)
            }
            Ok(None) => {
                warn!("Cache miss for key: {key}");
                None
            }
            Err(e) => {
                error!("Redis get error for key '{}': {:?}", key, e);
                None
            }
        }
    }

    async fn write(&self, key: &str, value: &str) {
        let Some(mut conn) = self.get_conn().await else {
            return;
        };

        let result: redis::RedisResult<()> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .query_async(&mut conn)
            .await;

        match result {
            Ok(()) => debug!("Cached key '{key}'"),
            Err(e) => error!("Failed to set cache key '{}': {:?}", key, e),
        }
    }

    async fn evict(&self, key: &str) {
        if let Some(mut conn) = self.get_conn().await
            && let Err(e) = redis::cmd("DEL")
                .arg(key)
                .query_async::<()>(&mut conn)
                .await
        {
            error!("Failed to delete key '{}': {:?}", key, e);
        }
    }
}
