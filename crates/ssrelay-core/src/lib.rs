#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use domain::{
    ApiKey, AuthorizedCommand, Command, CommandOutcome, CommandRequest, ParamSpec, PlatformReply,
    ServiceCredential, VideoLink, VideoMatch, attach_credential,
};
pub use error::{ErrorCategory, ErrorReport, RelayError, RelayResult};
pub use ports::{CommandForwarder, UnconfiguredSearch, VideoSearchPort};
pub use services::RelayService;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
