use crate::{
    abstract_trait::order::repository::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
    model::order::Order,
};
use async_trait::async_trait;
use shared::{errors::RepositoryError, utils::Identifier};
use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};
use tracing::info;

/// Order store kept in process memory, keyed by id so listings come back in
/// creation order. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<BTreeMap<Identifier, Order>>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.read().map(|orders| orders.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn poisoned() -> RepositoryError {
        RepositoryError::Custom("order store lock poisoned".to_string())
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for InMemoryOrderStore {
    async fn insert(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut orders = self.orders.write().map_err(|_| Self::poisoned())?;

        if orders.contains_key(&order.id) {
            return Err(RepositoryError::AlreadyExists(format!("order {}", order.id)));
        }

        orders.insert(order.id, order.clone());
        info!("✅ Inserted order {} (in-memory)", order.id);
        Ok(())
    }

    async fn delete_by_id(&self, id: &Identifier) -> Result<(), RepositoryError> {
        let mut orders = self.orders.write().map_err(|_| Self::poisoned())?;

        orders
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for InMemoryOrderStore {
    async fn find_by_id(&self, id: &Identifier) -> Result<Order, RepositoryError> {
        let orders = self.orders.read().map_err(|_| Self::poisoned())?;
        orders.get(id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn find_by_customer_id(&self, customer_id: &str) -> Result<Vec<Order>, RepositoryError> {
        let orders = self.orders.read().map_err(|_| Self::poisoned())?;

        Ok(orders
            .values()
            .filter(|order| order.customer.id == customer_id)
            .cloned()
            .collect())
    }
}
