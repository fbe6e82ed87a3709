//! Error types for the remote data gateway

use thiserror::Error;

/// Result alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors that can occur when talking to the hosted auth/database service
///
/// The gateway never retries and attaches no recovery hints; callers are
/// expected to surface a generic message and move on.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// Email or password was empty (rejected before any request is sent)
    #[error("Email and password must not be empty")]
    EmptyCredentials,

    /// The service rejected the credentials
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// HTTP request failed (network, DNS, TLS)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// Unauthorized - missing or invalid API key / session token
    #[error("Unauthorized")]
    Unauthorized,

    /// A row lookup came back empty
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// Table or resource name
        resource: String,
        /// The id that was looked up
        id: String,
    },

    /// The service returned an error status
    #[error("Service error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the service
        message: String,
    },
}

impl GatewayError {
    /// Build a `NotFound` error for a table row
    #[must_use]
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = GatewayError::not_found("events", "42");
        assert_eq!(err.to_string(), "events with id 42 not found");
    }

    #[test]
    fn test_api_error_display() {
        let err = GatewayError::ApiError {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Service error (status 500): boom");
    }
}
