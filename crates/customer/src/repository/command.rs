use crate::{
    abstract_trait::customer::repository::CustomerCommandRepositoryTrait,
    domain::requests::customer::{CreateCustomerRequest, UpdateCustomerRequest},
    model::customer::Customer,
    repository::COLUMNS,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct CustomerCommandRepository {
    db: ConnectionPool,
}

impl CustomerCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerCommandRepositoryTrait for CustomerCommandRepository {
    async fn create(
        &self,
        id: &str,
        req: &CreateCustomerRequest,
    ) -> Result<Customer, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let customer = sqlx::query_as::<_, Customer>(&format!(
            r#"
            INSERT INTO customers (customer_id, name, surname, email, birthdate, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&req.name)
        .bind(&req.surname)
        .bind(&req.email)
        .bind(req.birthdate)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to insert customer {}: {:?}", req.email, err);
            RepositoryError::from_insert(err, &format!("email {}", req.email))
        })?;

        info!("✅ Inserted customer {id}");
        Ok(customer)
    }

    async fn update(
        &self,
        id: &str,
        req: &UpdateCustomerRequest,
    ) -> Result<Customer, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let customer = sqlx::query_as::<_, Customer>(&format!(
            r#"
            UPDATE customers
            SET name = $2,
                surname = $3,
                email = $4,
                updated_at = NOW()
            WHERE customer_id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&req.name)
        .bind(&req.surname)
        .bind(&req.email)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update customer {id}: {:?}", err);
            RepositoryError::from_insert(err, &format!("email {}", req.email))
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("✅ Updated customer {id}");
        Ok(customer)
    }

    async fn delete(&self, id: &str) -> Result<Customer, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let customer = sqlx::query_as::<_, Customer>(&format!(
            "DELETE FROM customers WHERE customer_id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete customer {id}: {:?}", err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🗑️ Deleted customer {id}");
        Ok(customer)
    }
}
