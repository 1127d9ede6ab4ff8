//! Public configuration for the SmartScreen client.

use std::time::Duration;

/// Default remote-control endpoint.
pub const DEFAULT_SMARTSCREEN_API_URL: &str = "https://smartscreen.tv/api";

/// Configuration for the SmartScreen client.
///
/// # Example
///
/// ```
/// use ssrelay_smartscreen::SmartScreenConfig;
/// use std::time::Duration;
///
/// let config = SmartScreenConfig::new()
///     .with_base_url("https://smartscreen.example/api")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct SmartScreenConfig {
    /// Remote-control endpoint every command is posted to
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout; `None` keeps the transport default (no timeout)
    pub(crate) timeout: Option<Duration>,
}

impl Default for SmartScreenConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SMARTSCREEN_API_URL.to_string(),
            user_agent: concat!("ssrelay-smartscreen/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl SmartScreenConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the remote-control endpoint.
    ///
    /// Defaults to `https://smartscreen.tv/api`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set an optional request timeout; `None` keeps the transport default.
    #[must_use]
    pub const fn with_optional_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
