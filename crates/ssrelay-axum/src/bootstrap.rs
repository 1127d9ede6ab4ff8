//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where concrete adapters are instantiated
//! and handed to the core as port trait objects.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use ssrelay_core::{
    ApiKey, CommandForwarder, RelayService, ServiceCredential, UnconfiguredSearch,
    VideoSearchPort,
};
use ssrelay_mcp::McpServer;
use ssrelay_smartscreen::{DEFAULT_SMARTSCREEN_API_URL, DefaultSmartScreenClient, SmartScreenConfig};
use ssrelay_youtube::{DEFAULT_YOUTUBE_SEARCH_URL, DefaultYouTubeClient, YouTubeConfig};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use url::Url;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins.
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Startup configuration failures. The server never binds when one occurs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SMARTSCREEN_SERVICE_TOKEN is not set; refusing to relay commands without a credential")]
    MissingCredential,

    #[error("invalid {name} URL '{value}': {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Display platform bearer token. Required.
    pub smartscreen_token: Option<String>,
    pub smartscreen_url: String,
    /// YouTube Data API key. Search is disabled without it.
    pub youtube_api_key: Option<String>,
    pub youtube_url: String,
    /// Applied to every outbound call; `None` keeps the transport default.
    pub upstream_timeout: Option<Duration>,
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            smartscreen_token: None,
            smartscreen_url: DEFAULT_SMARTSCREEN_API_URL.to_string(),
            youtube_api_key: None,
            youtube_url: DEFAULT_YOUTUBE_SEARCH_URL.to_string(),
            upstream_timeout: None,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn with_smartscreen_token(mut self, token: impl Into<String>) -> Self {
        self.smartscreen_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_youtube_api_key(mut self, key: impl Into<String>) -> Self {
        self.youtube_api_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_smartscreen_url(mut self, url: impl Into<String>) -> Self {
        self.smartscreen_url = url.into();
        self
    }

    #[must_use]
    pub fn with_youtube_url(mut self, url: impl Into<String>) -> Self {
        self.youtube_url = url.into();
        self
    }

    #[must_use]
    pub const fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = Some(timeout);
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Check everything that must hold before the server may bind.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.credential()?;
        check_url("SmartScreen API", &self.smartscreen_url)?;
        check_url("YouTube API", &self.youtube_url)?;
        Ok(())
    }

    /// The display platform credential, or `MissingCredential` if absent or blank.
    pub fn credential(&self) -> Result<ServiceCredential, ConfigError> {
        self.smartscreen_token
            .as_deref()
            .and_then(|token| ServiceCredential::new(token).ok())
            .ok_or(ConfigError::MissingCredential)
    }

    /// The YouTube API key, if one is set and non-blank.
    pub fn api_key(&self) -> Option<ApiKey> {
        self.youtube_api_key
            .as_deref()
            .and_then(|key| ApiKey::new(key).ok())
    }
}

fn check_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidUrl {
            name,
            value: value.to_string(),
            source,
        })
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The relay orchestrator shared by every route.
    pub relay: Arc<RelayService>,
    /// MCP dispatcher over the same relay.
    pub mcp: Arc<McpServer>,
}

impl AxumContext {
    /// Build the context around an already-wired relay service.
    pub fn from_relay(relay: Arc<RelayService>) -> Self {
        let mcp = Arc::new(McpServer::new(Arc::clone(&relay)));
        Self { relay, mcp }
    }
}

/// Validate the configuration and wire all adapters.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    config.validate()?;
    let credential = config.credential()?;

    let smartscreen = SmartScreenConfig::new()
        .with_base_url(config.smartscreen_url.clone())
        .with_optional_timeout(config.upstream_timeout);
    let forwarder: Arc<dyn CommandForwarder> =
        Arc::new(DefaultSmartScreenClient::new(&smartscreen)?);

    let search: Arc<dyn VideoSearchPort> = if let Some(key) = config.api_key() {
        let youtube = YouTubeConfig::new(key)
            .with_base_url(config.youtube_url.clone())
            .with_optional_timeout(config.upstream_timeout);
        Arc::new(DefaultYouTubeClient::new(&youtube)?)
    } else {
        warn!("YOUTUBE_API_KEY is not set; /search-youtube will fail with a configuration error");
        Arc::new(UnconfiguredSearch)
    };

    info!(
        smartscreen_url = %config.smartscreen_url,
        youtube_url = %config.youtube_url,
        upstream_timeout = ?config.upstream_timeout,
        "Relay bootstrapped"
    );

    let relay = Arc::new(RelayService::new(credential, forwarder, search));
    Ok(AxumContext::from_relay(relay))
}

/// Start the web server and run until `cancel` fires.
pub async fn start_server(config: ServerConfig, cancel: CancellationToken) -> Result<()> {
    let ctx = bootstrap(&config)?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    info!("ssrelay listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await?;

    info!("ssrelay shut down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> ServerConfig {
        ServerConfig::default().with_smartscreen_token("tok")
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.smartscreen_url, "https://smartscreen.tv/api");
        assert!(config.upstream_timeout.is_none());
        assert!(matches!(config.cors, CorsConfig::AllowAll));
    }

    #[test]
    fn test_missing_token_fails_validation() {
        let err = ServerConfig::default().validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential));

        let err = ServerConfig::default()
            .with_smartscreen_token("   ")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential));
    }

    #[test]
    fn test_invalid_url_fails_validation() {
        let err = configured()
            .with_smartscreen_url("not a url")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { name: "SmartScreen API", .. }));
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        assert!(configured().with_youtube_api_key("").api_key().is_none());
        assert!(configured().with_youtube_api_key("k").api_key().is_some());
    }

    #[test]
    fn test_bootstrap_without_token_is_config_error() {
        let err = bootstrap(&ServerConfig::default()).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingCredential)
        ));
    }

    #[test]
    fn test_bootstrap_without_api_key_succeeds() {
        assert!(bootstrap(&configured()).is_ok());
    }

    #[tokio::test]
    async fn test_start_server_stops_on_cancel() {
        let cancel = CancellationToken::new();
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..configured()
        };
        let server = tokio::spawn(start_server(config, cancel.clone()));
        cancel.cancel();
        assert!(server.await.unwrap().is_ok());
    }
}
