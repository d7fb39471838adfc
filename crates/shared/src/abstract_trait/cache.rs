use async_trait::async_trait;
use std::sync::Arc;

pub type DynCache = Arc<dyn CacheTrait + Send + Sync>;

/// Key/value capability behind the read-through caches.
///
/// Implementations swallow their own failures: a broken cache reads as a
/// miss and a failed write is dropped, so callers always fall through to
/// the primary store.
#[async_trait]
pub trait CacheTrait {
    async fn read(&self, key: &str) -> Option<String>;
    async fn write(&self, key: &str, value: &str);
    async fn evict(&self, key: &str);
}
