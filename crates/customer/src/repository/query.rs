use crate::{
    abstract_trait::customer::repository::CustomerQueryRepositoryTrait,
    model::customer::Customer, repository::COLUMNS,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct CustomerQueryRepository {
    db: ConnectionPool,
}

impl CustomerQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Customer, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        sqlx::query_as::<_, Customer>(&format!(
            "SELECT {COLUMNS} FROM customers WHERE {column} = $1 \
             ORDER BY created_at, customer_id LIMIT 1"
        ))
        .bind(value)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch customer by {column}: {:?}", e);
            RepositoryError::from(e)
        })?
        .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl CustomerQueryRepositoryTrait for CustomerQueryRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let customers = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {COLUMNS} FROM customers ORDER BY created_at, customer_id"
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch customers: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("Found {} customer(s)", customers.len());
        Ok(customers)
    }

    async fn find_by_id(&self, id: &str) -> Result<Customer, RepositoryError> {
        self.find_one("customer_id", id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Customer, RepositoryError> {
        self.find_one("email", email).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Customer, RepositoryError> {
        self.find_one("name", name).await
    }
}
