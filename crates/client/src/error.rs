//! Error types for the Malloy Publisher client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during publisher client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Caller supplied an invalid parameter combination.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection refused or unreachable host.
    #[error("Connection failed to {0}")]
    ConnectionRefused(String),

    /// Request timed out.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Error response from the publisher.
    #[error("API error ({status}) at {url}: {message}{}", .code.as_ref().map(|c| format!(" [{c}]")).unwrap_or_default())]
    Api {
        status: u16,
        url: String,
        message: String,
        code: Option<String>,
    },

    /// Response body did not match the expected schema.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error is worth retrying.
    ///
    /// The client performs no retries itself; this classifies transport-level
    /// failures so callers can decide.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::ConnectionRefused(_) | Self::Timeout(_) => true,
            Self::Api { status, .. } => Self::is_retryable_status(*status),
            _ => false,
        }
    }

    /// Check if an HTTP status code indicates a transient failure.
    ///
    /// Retryable status codes:
    /// - 429: Too Many Requests (rate limiting)
    /// - 502: Bad Gateway (transient server error)
    /// - 503: Service Unavailable (transient server error)
    /// - 504: Gateway Timeout (transient server error)
    ///
    /// Non-retryable status codes (fail immediately):
    /// - 400, 401, 403, 404: Client errors
    /// - 500: Internal Server Error (typically indicates a bug, not transient)
    /// - 501: Not Implemented
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }

    /// Check if this error indicates missing or rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status == 401 || *status == 403)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_retryable() {
        let err = ClientError::Timeout("http://localhost:4000/api/v0/projects".to_string());
        assert!(err.is_retryable());

        let err = ClientError::InvalidParams("test".to_string());
        assert!(!err.is_retryable());

        let err = ClientError::Api {
            status: 503,
            url: "http://localhost:4000/api/v0/projects".to_string(),
            message: "unavailable".to_string(),
            code: None,
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_is_retryable_status_retryable() {
        assert!(ClientError::is_retryable_status(429));
        assert!(ClientError::is_retryable_status(502));
        assert!(ClientError::is_retryable_status(503));
        assert!(ClientError::is_retryable_status(504));
    }

    #[test]
    fn test_is_retryable_status_not_retryable() {
        // Client errors (4xx) - should not retry
        assert!(!ClientError::is_retryable_status(400));
        assert!(!ClientError::is_retryable_status(401));
        assert!(!ClientError::is_retryable_status(404));

        // Server errors (5xx) that are not retryable
        assert!(!ClientError::is_retryable_status(500));
        assert!(!ClientError::is_retryable_status(501));

        // Success codes
        assert!(!ClientError::is_retryable_status(200));
    }

    #[test]
    fn test_error_is_auth_error() {
        let err = ClientError::Api {
            status: 401,
            url: "http://localhost:4000/api/v0/projects".to_string(),
            message: "unauthorized".to_string(),
            code: None,
        };
        assert!(err.is_auth_error());

        let err = ClientError::Timeout("u".to_string());
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_api_error_display_includes_code() {
        let err = ClientError::Api {
            status: 404,
            url: "http://localhost:4000/api/v0/projects/missing".to_string(),
            message: "Project not found".to_string(),
            code: Some("not_found".to_string()),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("404"));
        assert!(rendered.contains("Project not found"));
        assert!(rendered.contains("[not_found]"));
    }
}
