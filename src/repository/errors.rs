use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Fixture(format!(
            "Malformed JSON at line {}, column {}: {err}",
            err.line(),
            err.column()
        ))
    }
}

impl From<csv::Error> for RepositoryError {
    fn from(err: csv::Error) -> Self {
        match err.position() {
            Some(position) => RepositoryError::Fixture(format!(
                "Malformed CSV at record {}: {err}",
                position.record()
            )),
            None => RepositoryError::Fixture(format!("Malformed CSV: {err}")),
        }
    }
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::Fixture(format!("Unable to read fixture: {err}"))
    }
}

impl<T> From<std::sync::PoisonError<T>> for RepositoryError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        RepositoryError::Unexpected("Client store lock poisoned".to_string())
    }
}
