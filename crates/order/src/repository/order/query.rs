use crate::{abstract_trait::order::repository::OrderQueryRepositoryTrait, model::order::Order};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError, utils::Identifier};
use sqlx::types::Json;
use tracing::error;

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_id(&self, id: &Identifier) -> Result<Order, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let document: Option<Json<Order>> =
            sqlx::query_scalar("SELECT document FROM orders WHERE id = $1")
                .bind(id.to_string())
                .fetch_optional(&mut *conn)
                .await
                .map_err(|err| {
                    error!("❌ Failed to fetch order {id}: {:?}", err);
                    RepositoryError::from(err)
                })?;

        document
            .map(|Json(order)| order)
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_customer_id(&self, customer_id: &str) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let documents: Vec<Json<Order>> = sqlx::query_scalar(
            r#"
            SELECT document
            FROM orders
            WHERE document -> 'customer' ->> 'id' = $1
            ORDER BY id
            "#,
        )
        .bind(customer_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to fetch orders for customer {customer_id}: {:?}",
                err
            );
            RepositoryError::from(err)
        })?;

        Ok(documents.into_iter().map(|Json(order)| order).collect())
    }
}
