//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to [`StorageError`].

use crate::storage::StorageError;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
pub fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Maps a rusqlite error to a StorageError.
///
/// - `SQLITE_CONSTRAINT_FOREIGNKEY` -> `InvalidData` (dangling contact_id)
/// - `CannotOpen` -> `ConnectionFailed`
/// - everything else -> `QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error) -> StorageError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            StorageError::InvalidData("foreign key constraint violation".to_string())
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            StorageError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        _ => StorageError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a StorageError.
///
/// Extracts the inner `rusqlite::Error` if present, otherwise maps to a
/// generic `QueryFailed` error.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> StorageError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err),
        tokio_rusqlite::Error::Close(_) => {
            StorageError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => StorageError::QueryFailed(err.to_string()),
    }
}
