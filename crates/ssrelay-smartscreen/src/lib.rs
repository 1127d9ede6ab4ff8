#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultSmartScreenClient, SmartScreenClient};

// Configuration
pub use config::{DEFAULT_SMARTSCREEN_API_URL, SmartScreenConfig};

// Errors
pub use error::{SmartScreenError, SmartScreenResult};

// Backend seam
pub use http::{HttpBackend, RawResponse, ReqwestBackend};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
