use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// Maps a unique-constraint violation onto `AlreadyExists`, everything
    /// else onto `Sqlx`.
    pub fn from_insert(err: SqlxError, what: &str) -> Self {
        match &err {
            SqlxError::Database(db_err) if db_err.is_unique_violation() => {
                RepositoryError::AlreadyExists(what.to_string())
            }
            _ => RepositoryError::Sqlx(err),
        }
    }
}
