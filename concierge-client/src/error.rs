//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
///
/// Server-reported errors keep their message verbatim so screens can surface
/// it directly; transport errors fall back to a generic message.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was decoded
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server reported an error envelope
    #[error("{0}")]
    Api(AppError),

    /// Response did not match the expected envelope shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Refresh failed: the caller must force a re-login
    #[error("Session expired, please log in again")]
    SessionExpired,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Message to surface to the user
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api(err) => err.message.clone(),
            ClientError::Http(_) | ClientError::InvalidResponse(_) => {
                "The server could not be reached. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Whether the caller must redirect to login
    pub fn requires_login(&self) -> bool {
        matches!(self, ClientError::SessionExpired)
            || matches!(self, ClientError::Api(err) if matches!(
                err.code,
                ErrorCode::NotAuthenticated
                    | ErrorCode::TokenExpired
                    | ErrorCode::TokenInvalid
                    | ErrorCode::SessionExpired
            ))
    }
}

impl From<AppError> for ClientError {
    fn from(err: AppError) -> Self {
        if err.code == ErrorCode::SessionExpired {
            ClientError::SessionExpired
        } else {
            ClientError::Api(err)
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_verbatim() {
        let err = ClientError::Api(AppError::with_message(
            ErrorCode::CancellationWindowClosed,
            "Cancellation is only possible on the first day of the stay",
        ));
        assert_eq!(
            err.user_message(),
            "Cancellation is only possible on the first day of the stay"
        );
    }

    #[test]
    fn test_requires_login() {
        assert!(ClientError::SessionExpired.requires_login());
        assert!(
            ClientError::Api(AppError::new(ErrorCode::TokenExpired)).requires_login()
        );
        assert!(
            !ClientError::Api(AppError::new(ErrorCode::BookingNotFound)).requires_login()
        );
    }

    #[test]
    fn test_session_expired_from_app_error() {
        let err: ClientError = AppError::session_expired().into();
        assert!(matches!(err, ClientError::SessionExpired));

        let err: ClientError = AppError::new(ErrorCode::RoomNotFound).into();
        assert!(matches!(err, ClientError::Api(_)));
    }
}
