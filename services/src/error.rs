use marker::MarkerError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors returned by every service operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error(transparent)]
    Marker(#[from] MarkerError),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

impl ServiceError {
    pub fn not_found(what: &str) -> Self {
        ServiceError::NotFound(format!("{what} not found"))
    }

    /// Converts a unique-constraint violation into `duplicate`; any other
    /// database error stays a `Database` error.
    pub fn on_unique_violation(err: DbErr, duplicate: ServiceError) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => duplicate,
            _ => ServiceError::Database(err),
        }
    }
}
