//! Relay error taxonomy.
//!
//! Every failure the relay can surface falls into one of four categories:
//! routing, configuration, validation, or relay (the external call failed).
//! Adapters map these to their own envelopes (HTTP status codes, MCP tool
//! results) through [`RelayError::suggested_status_code`] and
//! [`ErrorReport`], so both surfaces report the same thing.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type alias for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;

/// Coarse error category, reported to callers as the error `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// No operation matches the requested path or name.
    Routing,
    /// A credential or key the operation needs is missing or invalid.
    Configuration,
    /// A required parameter is missing or has the wrong type.
    Validation,
    /// The outbound call failed, timed out, or was refused upstream.
    Relay,
}

impl ErrorCategory {
    /// Stable string form used in response bodies.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Routing => "routing",
            Self::Configuration => "configuration",
            Self::Validation => "validation",
            Self::Relay => "relay",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while routing, validating, or relaying a command.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The command name or path is not one of the known operations.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Missing credential, missing API key, or an unusable endpoint URL.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The inbound parameters failed presence/type validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The outbound connection could not be established or was interrupted.
    #[error("Upstream request failed: {0}")]
    Transport(String),

    /// The outbound call exceeded the configured transport timeout.
    #[error("Upstream request timed out: {0}")]
    Timeout(String),

    /// The external service answered with a non-success HTTP status.
    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus {
        /// HTTP status returned by the external service
        status: u16,
        /// Raw response body, relayed for diagnostics
        body: String,
    },

    /// The display platform accepted the call but refused the command.
    #[error("Display platform rejected the command (ErrCode {code}): {message}")]
    Rejected {
        /// Platform error code (`ErrCode`)
        code: i64,
        /// Platform error message (`ErrMsg`)
        message: String,
    },

    /// The external service answered with a body we could not interpret.
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    /// The video search returned no usable first result.
    #[error("No relevant YouTube video found for query: '{0}'")]
    NoResults(String),
}

impl RelayError {
    /// Category this error belongs to.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownCommand(_) => ErrorCategory::Routing,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Transport(_)
            | Self::Timeout(_)
            | Self::UpstreamStatus { .. }
            | Self::Rejected { .. }
            | Self::MalformedResponse(_)
            | Self::NoResults(_) => ErrorCategory::Relay,
        }
    }

    /// Returns a suggested HTTP status code for this error.
    pub const fn suggested_status_code(&self) -> u16 {
        match self {
            Self::UnknownCommand(_) | Self::NoResults(_) => 404,
            Self::Configuration(_) => 500,
            Self::Validation(_) => 422,
            Self::Timeout(_) => 504,
            Self::Transport(_)
            | Self::UpstreamStatus { .. }
            | Self::Rejected { .. }
            | Self::MalformedResponse(_) => 502,
        }
    }
}

/// Serializable error envelope shared by the HTTP and tool surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Human-readable error message.
    pub error: String,
    /// HTTP-equivalent status code.
    pub status: u16,
    /// Error category discriminant for client-side handling.
    #[serde(rename = "type")]
    pub category: ErrorCategory,
}

impl From<&RelayError> for ErrorReport {
    fn from(err: &RelayError) -> Self {
        Self {
            error: err.to_string(),
            status: err.suggested_status_code(),
            category: err.category(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_cover_taxonomy() {
        assert_eq!(
            RelayError::UnknownCommand("x".into()).category(),
            ErrorCategory::Routing
        );
        assert_eq!(
            RelayError::Configuration("x".into()).category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            RelayError::Validation("x".into()).category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            RelayError::Rejected {
                code: 3,
                message: "bad".into()
            }
            .category(),
            ErrorCategory::Relay
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(RelayError::Validation(String::new()).suggested_status_code(), 422);
        assert_eq!(RelayError::Timeout(String::new()).suggested_status_code(), 504);
        assert_eq!(RelayError::NoResults("q".into()).suggested_status_code(), 404);
        assert_eq!(
            RelayError::UpstreamStatus {
                status: 401,
                body: String::new()
            }
            .suggested_status_code(),
            502
        );
    }

    #[test]
    fn test_error_report_shape() {
        let err = RelayError::Validation("missing field `item`".into());
        let json = serde_json::to_value(ErrorReport::from(&err)).unwrap();
        assert_eq!(json["status"], 422);
        assert_eq!(json["type"], "validation");
        assert!(json["error"].as_str().unwrap().contains("missing field `item`"));
    }

    #[test]
    fn test_no_results_message_names_query() {
        let err = RelayError::NoResults("cats".into());
        assert_eq!(
            err.to_string(),
            "No relevant YouTube video found for query: 'cats'"
        );
    }
}
