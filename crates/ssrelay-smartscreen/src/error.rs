//! Error types for SmartScreen operations.
//!
//! These are mapped to core relay errors at the port boundary.

use thiserror::Error;

/// Result type alias for SmartScreen operations.
pub type SmartScreenResult<T> = Result<T, SmartScreenError>;

/// Errors related to SmartScreen API calls.
#[derive(Debug, Error)]
pub enum SmartScreenError {
    /// The API answered with a non-success HTTP status.
    #[error("SmartScreen API request failed with status {status}: {body}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// The API answered 2xx but refused the command.
    #[error("SmartScreen rejected the command (ErrCode {code}): {message}")]
    Rejected {
        /// `ErrCode` from the response, `-1` when absent
        code: i64,
        /// `ErrMsg` from the response
        message: String,
    },

    /// The API returned a body that is not the expected JSON.
    #[error("Invalid response from SmartScreen API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
