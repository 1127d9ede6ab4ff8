//! Command-line interface definition.
//!
//! Every option can also come from the environment (and therefore from a
//! `.env` file loaded before parsing).

use std::time::Duration;

use clap::Parser;
use ssrelay_axum::{CorsConfig, ServerConfig};

#[derive(Debug, Parser)]
#[command(name = "ssrelay")]
#[command(about = "Relay display commands to SmartScreen and search YouTube")]
#[command(version)]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "SSRELAY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "SSRELAY_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Bearer token for the SmartScreen API
    #[arg(long, env = "SMARTSCREEN_SERVICE_TOKEN", hide_env_values = true)]
    pub smartscreen_token: Option<String>,

    /// SmartScreen remote-control endpoint
    #[arg(long, env = "SMARTSCREEN_API_URL", default_value = "https://smartscreen.tv/api")]
    pub smartscreen_url: String,

    /// YouTube Data API key; search is disabled without it
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub youtube_api_key: Option<String>,

    /// YouTube search endpoint
    #[arg(
        long,
        env = "YOUTUBE_API_URL",
        default_value = "https://www.googleapis.com/youtube/v3/search"
    )]
    pub youtube_url: String,

    /// Timeout in seconds for every outbound call (unset: no timeout)
    #[arg(long, env = "SSRELAY_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,

    /// Allowed CORS origin (repeatable); any origin when omitted
    #[arg(long = "allowed-origin")]
    pub allowed_origins: Vec<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    pub fn into_server_config(self) -> ServerConfig {
        let cors = if self.allowed_origins.is_empty() {
            CorsConfig::AllowAll
        } else {
            CorsConfig::AllowOrigins(self.allowed_origins)
        };

        ServerConfig {
            host: self.host,
            port: self.port,
            smartscreen_token: self.smartscreen_token,
            smartscreen_url: self.smartscreen_url,
            youtube_api_key: self.youtube_api_key,
            youtube_url: self.youtube_url,
            upstream_timeout: self.upstream_timeout_secs.map(Duration::from_secs),
            cors,
        }
    }
}
