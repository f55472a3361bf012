//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and an error page.

use crate::{store::StoreError, views};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application-wide error type.
///
/// Submitted amounts are never validated, so the only request-level
/// failure is an unknown account key. Everything else comes from the
/// accounts file.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Reading or writing the accounts file failed.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A blocking store task panicked or was cancelled.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The requested account key is not in the account table.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account not found: {0}")]
    AccountNotFound(String),
}

/// Convert AppError into an HTTP response.
///
/// # Status Code Mapping
///
/// - `AccountNotFound` → 404 Not Found
/// - `Store`, `Task` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::AccountNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Store(_) | AppError::Task(_) => {
                tracing::error!(error = %self, "Account store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, views::error_page(status, &message)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_found_status() {
        let response = AppError::AccountNotFound("bogus".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_error_is_internal() {
        let err = StoreError::Write {
            path: PathBuf::from("accounts.json"),
            source: std::io::Error::other("disk full"),
        };
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_panicked_store_task_is_internal() {
        let join_err = tokio::task::spawn_blocking::<_, ()>(|| panic!("persist blew up"))
            .await
            .unwrap_err();

        let response = AppError::from(join_err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
