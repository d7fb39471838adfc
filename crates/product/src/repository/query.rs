use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait, model::product::Product,
    repository::COLUMNS,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {COLUMNS} FROM products ORDER BY name"
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("Found {} product(s)", products.len());
        Ok(products)
    }

    async fn find_by_id(&self, id: &str) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, Product>(&format!(
            "SELECT {COLUMNS} FROM products WHERE product_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product {id}: {:?}", e);
            RepositoryError::from(e)
        })?
        .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_name(&self, name: &str) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, Product>(&format!("SELECT {COLUMNS} FROM products WHERE name = $1"))
            .bind(name)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product named {name}: {:?}", e);
                RepositoryError::from(e)
            })?
            .ok_or(RepositoryError::NotFound)
    }
}
