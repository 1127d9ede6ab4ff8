#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

pub use client::{DefaultYouTubeClient, YouTubeClient};
pub use config::{DEFAULT_YOUTUBE_SEARCH_URL, YouTubeConfig};
pub use error::{YouTubeError, YouTubeResult};
pub use http::{HttpBackend, RawResponse, ReqwestBackend};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
