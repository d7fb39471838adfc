use crate::{abstract_trait::order::repository::OrderCommandRepositoryTrait, model::order::Order};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError, utils::Identifier};
use sqlx::types::Json;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn insert(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, document, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(order.id.to_string())
        .bind(Json(order))
        .bind(order.created_at)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to insert order {}: {:?}", order.id, err);
            RepositoryError::from_insert(err, &format!("order {}", order.id))
        })?;

        info!(
            "✅ Inserted order {} for customer {}",
            order.id, order.customer.id
        );
        Ok(())
    }

    async fn delete_by_id(&self, id: &Identifier) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id.to_string())
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete order {id}: {:?}", err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted order {id}");
        Ok(())
    }
}
