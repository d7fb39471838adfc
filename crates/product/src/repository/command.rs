use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::ProductRequest, model::product::Product, repository::COLUMNS,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create(&self, id: &str, req: &ProductRequest) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products (product_id, name, description, price, quantity, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.quantity)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to insert product {}: {:?}", req.name, err);
            RepositoryError::from_insert(err, &format!("product {}", req.name))
        })?;

        info!("✅ Inserted product {id} ({})", product.name);
        Ok(product)
    }

    async fn update(&self, id: &str, req: &ProductRequest) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET name = $2,
                description = $3,
                price = $4,
                quantity = $5,
                updated_at = NOW()
            WHERE product_id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.quantity)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product {id}: {:?}", err);
            RepositoryError::from_insert(err, &format!("product {}", req.name))
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("✅ Updated product {id}");
        Ok(product)
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product {id}: {:?}", err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted product {id}");
        Ok(())
    }
}
