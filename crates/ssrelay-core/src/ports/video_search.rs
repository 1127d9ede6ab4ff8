//! Port for the video-search provider.

use async_trait::async_trait;

use crate::domain::VideoMatch;
use crate::error::{RelayError, RelayResult};

/// Issues one search query and returns the provider's first result.
///
/// `Ok(None)` means the provider answered but had no usable first item.
/// Implementations never re-rank or look past the first item.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoSearchPort: Send + Sync {
    async fn first_match(&self, query: &str) -> RelayResult<Option<VideoMatch>>;
}

/// Stand-in wired when no search API key is configured.
///
/// Every call fails with a configuration error, without any outbound I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredSearch;

#[async_trait]
impl VideoSearchPort for UnconfiguredSearch {
    async fn first_match(&self, _query: &str) -> RelayResult<Option<VideoMatch>> {
        Err(RelayError::Configuration(
            "YOUTUBE_API_KEY is not configured; video search is unavailable".to_string(),
        ))
    }
}
