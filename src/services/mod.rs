use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod api;
pub mod client;
pub mod main;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Client not found")]
    NotFound,

    #[error("Form error: {0}")]
    Form(String),

    #[error("Type constraint violated: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
