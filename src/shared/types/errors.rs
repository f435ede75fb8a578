use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Whether this error comes from the flow store rather than the caller.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, DomainError::Database(_))
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
