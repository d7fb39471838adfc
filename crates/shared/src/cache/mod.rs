mod cache_store;

pub use self::cache_store::CacheStore;

use crate::abstract_trait::CacheTrait;
use serde::{Serialize, de::DeserializeOwned};
use tracing::error;

pub async fn read_json<T>(cache: &(dyn CacheTrait + Send + Sync), key: &str) -> Option<T>
where
    T: DeserializeOwned,
{
    let raw = cache.read(key).await?;

    match serde_json::from_str::<T>(&raw) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            error!("Failed to deserialize cached value for key '{}': {:?}", key, e);
            None
        }
    }
}

pub async fn write_json<T>(cache: &(dyn CacheTrait + Send + Sync), key: &str, data: &T)
where
    T: Serialize + ?Sized,
{
    match serde_json::to_string(data) {
        Ok(json) => cache.write(key, &json).await,
        Err(e) => error!("Failed to serialize data for key '{}': {:?}", key, e),
    }
}
