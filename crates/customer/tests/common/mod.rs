#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use customer::{
    abstract_trait::customer::repository::{
        CustomerCommandRepositoryTrait, CustomerQueryRepositoryTrait,
    },
    di::{DependenciesInject, DependenciesInjectDeps},
    domain::requests::customer::{CreateCustomerRequest, UpdateCustomerRequest},
    model::customer::Customer,
};
use shared::{
    abstract_trait::{CacheTrait, DynCache},
    errors::RepositoryError,
    utils::{Metrics, RequestContext},
};
use std::{
    collections::{BTreeMap, HashMap},
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

pub fn ctx() -> RequestContext {
    RequestContext::new("customer-test")
}

/// Customer table in a map, counting lookups so cache hits can be told
/// apart from database reads.
#[derive(Clone, Default)]
pub struct MemoryCustomers {
    rows: Arc<Mutex<BTreeMap<String, Customer>>>,
    lookups: Arc<AtomicUsize>,
}

impl MemoryCustomers {
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CustomerQueryRepositoryTrait for MemoryCustomers {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Customer, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_email(&self, email: &str) -> Result<Customer, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .values()
            .find(|c| c.email == email)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_name(&self, name: &str) -> Result<Customer, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        // ids are time ordered, so the first match is the earliest created
        self.rows
            .lock()
            .unwrap()
            .values()
            .find(|c| c.name == name)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl CustomerCommandRepositoryTrait for MemoryCustomers {
    async fn create(
        &self,
        id: &str,
        req: &CreateCustomerRequest,
    ) -> Result<Customer, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|c| c.email == req.email) {
            return Err(RepositoryError::AlreadyExists(format!("email {}", req.email)));
        }

        let customer = Customer {
            customer_id: id.to_string(),
            name: req.name.clone(),
            surname: req.surname.clone(),
            email: req.email.clone(),
            birthdate: req.birthdate,
            created_at: Utc::now(),
            updated_at: None,
        };
        rows.insert(id.to_string(), customer.clone());
        Ok(customer)
    }

    async fn update(
        &self,
        id: &str,
        req: &UpdateCustomerRequest,
    ) -> Result<Customer, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let customer = rows.get_mut(id).ok_or(RepositoryError::NotFound)?;

        customer.name = req.name.clone();
        customer.surname = req.surname.clone();
        customer.email = req.email.clone();
        customer.updated_at = Some(Utc::now());
        Ok(customer.clone())
    }

    async fn delete(&self, id: &str) -> Result<Customer, RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .remove(id)
            .ok_or(RepositoryError::NotFound)
    }
}

/// Cache in a map. A broken cache misses every read and drops every write.
#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: Arc<Mutex<HashMap<String, String>>>,
    broken: Arc<AtomicBool>,
}

impl MemoryCache {
    pub fn break_it(&self) {
        self.broken.store(true, Ordering::SeqCst);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.entries.lock().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl CacheTrait for MemoryCache {
    async fn read(&self, key: &str) -> Option<String> {
        if self.broken.load(Ordering::SeqCst) {
            return None;
        }
        self.get(key)
    }

    async fn write(&self, key: &str, value: &str) {
        if self.broken.load(Ordering::SeqCst) {
            return;
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    async fn evict(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

pub struct Harness {
    pub repo: MemoryCustomers,
    pub cache: MemoryCache,
    pub container: DependenciesInject,
}

pub fn harness(with_cache: bool) -> Harness {
    let repo = MemoryCustomers::default();
    let cache = MemoryCache::default();

    let container = DependenciesInject::new(DependenciesInjectDeps {
        query: Arc::new(repo.clone()),
        command: Arc::new(repo.clone()),
        cache: with_cache.then(|| Arc::new(cache.clone()) as DynCache),
        metrics: Metrics::new(),
    });

    Harness {
        repo,
        cache,
        container,
    }
}

pub fn ada() -> CreateCustomerRequest {
    serde_json::from_value(serde_json::json!({
        "name": "Ada",
        "surname": "Lovelace",
        "email": "a@x.com",
        "birthdate": "1815-12-10"
    }))
    .unwrap()
}
