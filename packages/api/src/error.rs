//! Server-side error type and its mapping onto what the browser is allowed to see.

use std::future::Future;
use std::time::Duration;

use dioxus::prelude::ServerFnError;
use store::{StoreError, ValidationError};
use thiserror::Error;

/// Shown for every failure the visitor or operator can do nothing specific about.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
    #[error("Not authenticated")]
    Unauthorized,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("mail dispatch failed: {0}")]
    Mail(String),
    #[error("stored content is unreadable: {0}")]
    Content(String),
    #[error("{0} timed out after {1:?}")]
    Timeout(&'static str, Duration),
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// The message returned to the client. Internal detail stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Validation(e) => e.to_string(),
            ApiError::Unauthorized | ApiError::InvalidCredentials => self.to_string(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }

    /// Log the error and convert it into a [`ServerFnError`].
    pub fn into_server_fn_error(self) -> ServerFnError {
        match &self {
            ApiError::Validation(_) | ApiError::Unauthorized | ApiError::InvalidCredentials => {
                tracing::warn!("Request rejected: {}", self)
            }
            _ => tracing::error!("Request failed: {}", self),
        }
        ServerFnError::new(self.public_message())
    }
}

/// `map_err` adapter for server functions.
pub(crate) fn server_error(e: impl Into<ApiError>) -> ServerFnError {
    e.into().into_server_fn_error()
}

/// Run `fut`, turning an elapsed `limit` into [`ApiError::Timeout`].
pub async fn with_timeout<T, E>(
    what: &'static str,
    limit: Duration,
    fut: impl Future<Output = Result<T, E>>,
) -> Result<T, ApiError>
where
    E: Into<ApiError>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result.map_err(Into::into),
        Err(_) => Err(ApiError::Timeout(what, limit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_message_hides_internals() {
        let err = ApiError::Store(StoreError::Backend("relation \"submissions\" does not exist".into()));
        assert_eq!(err.public_message(), GENERIC_FAILURE);

        let err = ApiError::Timeout("submit_contact", Duration::from_secs(10));
        assert_eq!(err.public_message(), GENERIC_FAILURE);

        assert_eq!(
            ApiError::InvalidCredentials.public_message(),
            "Invalid username or password"
        );
        assert_eq!(
            ApiError::Validation(ValidationError::InvalidEmail).public_message(),
            "Please enter a valid email address"
        );
    }

    #[tokio::test]
    async fn test_with_timeout_maps_elapsed_deadline() {
        let slow = async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok::<_, ApiError>(1)
        };
        let err = with_timeout("slow call", Duration::from_millis(10), slow)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Timeout("slow call", _)));

        let fast = async { Ok::<_, StoreError>(2) };
        assert_eq!(
            with_timeout("fast call", Duration::from_secs(1), fast).await.unwrap(),
            2
        );
    }
}
