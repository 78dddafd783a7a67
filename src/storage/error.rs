use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: i64 },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Maps a [`StorageError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `InvalidData` -> 400
/// - `ConnectionFailed` / `QueryFailed` -> 500 (details are logged, never
///   surfaced to the caller)
pub fn storage_error_to_status_code(error: &StorageError) -> u16 {
    match error {
        StorageError::NotFound { .. } => 404,
        StorageError::InvalidData(_) => 400,
        StorageError::ConnectionFailed(_) | StorageError::QueryFailed(_) => 500,
    }
}
