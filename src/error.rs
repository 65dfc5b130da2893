//! Error types for the SES query-API client.
//!
//! The error taxonomy mirrors the three ways a send can fail:
//!
//! - the network exchange itself failed ([`SesError::Transport`] /
//!   [`SesError::Timeout`]),
//! - the service answered with a non-200 status
//!   ([`SesError::RemoteRejection`]),
//! - the client was assembled with unusable settings
//!   ([`SesError::Configuration`]).
//!
//! Malformed email input is intentionally not validated locally; it
//! surfaces as a remote rejection carrying the service's own diagnostic
//! text.
//!
//! # Examples
//!
//! ```rust
//! use integrations_aws_ses_query::SesError;
//!
//! fn describe(error: &SesError) {
//!     if let Some(status) = error.status() {
//!         println!("SES rejected the request with status {}", status);
//!     }
//! }
//! ```

use http::StatusCode;
use thiserror::Error;

/// Result type alias for SES operations.
pub type SesResult<T> = std::result::Result<T, SesError>;

/// Top-level error type for the SES query-API client.
#[derive(Debug, Error)]
pub enum SesError {
    /// Client construction or configuration errors.
    ///
    /// These occur before any request is made, e.g. when the builder is
    /// missing credentials or the HTTP client cannot be initialized.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error.
        message: String,
    },

    /// Transport and network errors.
    ///
    /// These occur when the HTTP exchange itself fails: connection
    /// refused, DNS resolution failure, TLS errors. Nothing is retried;
    /// the error is surfaced to the caller after the first attempt.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport error.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Request timeout errors.
    ///
    /// The underlying transport applies a bounded default timeout so an
    /// unresponsive endpoint cannot block the caller indefinitely.
    #[error("Timeout: {message}")]
    Timeout {
        /// Description of the timeout.
        message: String,
    },

    /// The service answered with a non-200 status.
    ///
    /// Status code and response body are carried as distinct fields so
    /// callers can match on the status instead of parsing the rendered
    /// message. The body is the service's XML error payload, verbatim.
    #[error("Remote rejection: status {status}, response: {body}")]
    RemoteRejection {
        /// HTTP status returned by the service.
        status: StatusCode,
        /// Full response body text, unmodified.
        body: String,
    },
}

impl SesError {
    /// Returns the HTTP status for remote rejections, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http::StatusCode;
    /// use integrations_aws_ses_query::SesError;
    ///
    /// let error = SesError::RemoteRejection {
    ///     status: StatusCode::FORBIDDEN,
    ///     body: "AccessDenied".to_string(),
    /// };
    /// assert_eq!(error.status(), Some(StatusCode::FORBIDDEN));
    /// ```
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SesError::RemoteRejection { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the response body for remote rejections, `None` otherwise.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            SesError::RemoteRejection { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SesError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SesError::Timeout {
                message: err.to_string(),
            }
        } else {
            SesError::Transport {
                message: err.to_string(),
                source: Some(Box::new(err)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_rejection_display_carries_status_and_body() {
        let error = SesError::RemoteRejection {
            status: StatusCode::FORBIDDEN,
            body: "AccessDenied".to_string(),
        };

        let rendered = error.to_string();
        assert!(rendered.contains("403"));
        assert!(rendered.contains("AccessDenied"));
    }

    #[test]
    fn test_status_accessor() {
        let rejection = SesError::RemoteRejection {
            status: StatusCode::BAD_REQUEST,
            body: "MalformedInput".to_string(),
        };
        assert_eq!(rejection.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(rejection.response_body(), Some("MalformedInput"));

        let transport = SesError::Transport {
            message: "connection refused".to_string(),
            source: None,
        };
        assert_eq!(transport.status(), None);
        assert_eq!(transport.response_body(), None);
    }

    #[test]
    fn test_configuration_display() {
        let error = SesError::Configuration {
            message: "credentials are required".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration error: credentials are required"
        );
    }
}
