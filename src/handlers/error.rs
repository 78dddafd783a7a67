use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::storage::{storage_error_to_status_code, StorageError};

/// Application error type that wraps `anyhow::Error`.
///
/// Lets handlers use `?` on anything convertible to `anyhow::Error`. The
/// response body is always a generic `{success:false, message}` envelope;
/// the underlying error is only logged server-side.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Database error");

        let status = if let Some(storage_error) = self.0.downcast_ref::<StorageError>() {
            StatusCode::from_u16(storage_error_to_status_code(storage_error))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let message = match status {
            StatusCode::NOT_FOUND => "Contact not found",
            StatusCode::BAD_REQUEST => "Invalid request data",
            _ => "An error occurred while processing your request",
        };

        (
            status,
            Json(serde_json::json!({
                "success": false,
                "message": message,
            })),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_not_found_becomes_404() {
        let err = AppError(
            StorageError::NotFound {
                entity_type: "Contact",
                id: 7,
            }
            .into(),
        );

        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_engine_failure_becomes_500() {
        let err = AppError(StorageError::QueryFailed("disk I/O error".to_string()).into());

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unknown_error_becomes_500() {
        let err = AppError(anyhow::anyhow!("boom"));

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
