use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The conditional write found an existing record with the same key.
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    /// Any other store-layer failure. `code` is the store's error code.
    #[error("Store unavailable ({code}): {message}")]
    Unavailable { code: String, message: String },
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Store error code recorded in audit events.
    pub fn code(&self) -> &str {
        match self {
            Self::AlreadyExists { .. } => "ConditionalCheckFailed",
            Self::Unavailable { code, .. } => code,
            Self::InvalidData(_) => "InvalidData",
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
