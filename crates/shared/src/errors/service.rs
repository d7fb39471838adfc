use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Persistence error: {0}")]
    Persistence(RepositoryError),

    #[error("Cancelled: {0}")]
    Cancelled(String),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound(_))
    }

    /// Like `From<RepositoryError>`, but names the missing record.
    pub fn from_repository(err: RepositoryError, missing: impl FnOnce() -> String) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound(missing()),
            other => ServiceError::from(other),
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound("Not found".to_string()),
            RepositoryError::AlreadyExists(msg) => {
                ServiceError::Validation(vec![format!("{msg} already exists")])
            }
            other => ServiceError::Persistence(other),
        }
    }
}
