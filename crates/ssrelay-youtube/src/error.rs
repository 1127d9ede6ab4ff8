//! Error types for YouTube search operations.

use thiserror::Error;

pub type YouTubeResult<T> = Result<T, YouTubeError>;

/// Errors related to YouTube API calls.
///
/// Network errors have their URL stripped, since it carries the API key.
#[derive(Debug, Error)]
pub enum YouTubeError {
    #[error("YouTube API request failed with status {status}: {body}")]
    ApiRequestFailed { status: u16, body: String },

    #[error("Invalid response from YouTube API: {message}")]
    InvalidResponse { message: String },

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for YouTubeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.without_url())
    }
}
