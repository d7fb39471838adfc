use crate::model::customer::Customer;
use shared::{
    abstract_trait::DynCache,
    cache::{read_json, write_json},
    utils::{Metrics, Resource, Status},
};
use tokio::time::Instant;
use tracing::debug;

pub fn id_key(id: &str) -> String {
    format!("customer-id:{id}")
}

pub fn email_key(email: &str) -> String {
    format!("customer-email:{email}")
}

pub fn name_key(name: &str) -> String {
    format!("customer-name:{name}")
}

/// Customer records cached under both their id and email keys. Name lookups
/// are cached under their own key only, since names are not unique.
///
/// With no backing cache every read misses and every write is a no-op.
#[derive(Clone)]
pub struct CustomerCache {
    cache: Option<DynCache>,
    metrics: Metrics,
}

impl CustomerCache {
    pub fn new(cache: Option<DynCache>, metrics: Metrics) -> Self {
        Self { cache, metrics }
    }

    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub async fn read(&self, key: &str) -> Option<Customer> {
        let cache = self.cache.as_ref()?;

        let start = Instant::now();
        let hit = read_json::<Customer>(cache.as_ref(), key).await;
        let outcome = if hit.is_some() { "hit" } else { "miss" };
        self.metrics.record_external(
            Resource::Cache,
            outcome,
            Status::Success,
            start.elapsed().as_secs_f64(),
        );

        debug!("Cache {outcome} for {key}");
        hit
    }

    pub async fn store(&self, customer: &Customer) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };

        let start = Instant::now();
        write_json(cache.as_ref(), &id_key(&customer.customer_id), customer).await;
        write_json(cache.as_ref(), &email_key(&customer.email), customer).await;
        self.metrics.record_external(
            Resource::Cache,
            "write",
            Status::Success,
            start.elapsed().as_secs_f64(),
        );
    }

    /// Caches a name lookup result under `customer-name:{name}`.
    pub async fn store_by_name(&self, name: &str, customer: &Customer) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };

        write_json(cache.as_ref(), &name_key(name), customer).await;
    }

    pub async fn evict(&self, customer: &Customer) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };

        cache.evict(&id_key(&customer.customer_id)).await;
        cache.evict(&email_key(&customer.email)).await;
        cache.evict(&name_key(&customer.name)).await;
    }

    pub async fn evict_name(&self, name: &str) {
        if let Some(cache) = self.cache.as_ref() {
            cache.evict(&name_key(name)).await;
        }
    }
}
