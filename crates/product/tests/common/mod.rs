#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use product::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    di::{DependenciesInject, DependenciesInjectDeps},
    domain::requests::product::ProductRequest,
    model::product::Product,
};
use shared::{
    errors::RepositoryError,
    utils::{Metrics, RequestContext},
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

pub fn ctx() -> RequestContext {
    RequestContext::new("product-test")
}

/// Product table in a map with the unique-name constraint enforced.
#[derive(Clone, Default)]
pub struct MemoryProducts {
    rows: Arc<Mutex<HashMap<String, Product>>>,
}

impl MemoryProducts {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn name_taken(rows: &HashMap<String, Product>, name: &str, except: &str) -> bool {
        rows.values()
            .any(|p| p.name == name && p.product_id != except)
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for MemoryProducts {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut products: Vec<_> = self.rows.lock().unwrap().values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn find_by_id(&self, id: &str) -> Result<Product, RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_name(&self, name: &str) -> Result<Product, RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .values()
            .find(|p| p.name == name)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MemoryProducts {
    async fn create(&self, id: &str, req: &ProductRequest) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if Self::name_taken(&rows, &req.name, id) {
            return Err(RepositoryError::AlreadyExists(format!("product {}", req.name)));
        }

        let product = Product {
            product_id: id.to_string(),
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            quantity: req.quantity,
            created_at: Utc::now(),
            updated_at: None,
        };
        rows.insert(id.to_string(), product.clone());
        Ok(product)
    }

    async fn update(&self, id: &str, req: &ProductRequest) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(id) {
            return Err(RepositoryError::NotFound);
        }
        if Self::name_taken(&rows, &req.name, id) {
            return Err(RepositoryError::AlreadyExists(format!("product {}", req.name)));
        }

        let product = rows.get_mut(id).ok_or(RepositoryError::NotFound)?;
        product.name = req.name.clone();
        product.description = req.description.clone();
        product.price = req.price;
        product.quantity = req.quantity;
        product.updated_at = Some(Utc::now());
        Ok(product.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

pub struct Harness {
    pub repo: MemoryProducts,
    pub container: DependenciesInject,
}

pub fn harness() -> Harness {
    let repo = MemoryProducts::default();
    let container = DependenciesInject::new(DependenciesInjectDeps {
        query: Arc::new(repo.clone()),
        command: Arc::new(repo.clone()),
        metrics: Metrics::new(),
    });

    Harness { repo, container }
}

pub fn widget(price: f64) -> ProductRequest {
    ProductRequest {
        name: "Widget".into(),
        description: "a small widget".into(),
        price,
        quantity: 5,
    }
}
