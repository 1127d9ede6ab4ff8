//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the relay expects from infrastructure.
//! They contain no transport details and use only domain types, so each
//! can be substituted with a test double.

mod forwarder;
mod video_search;

pub use forwarder::CommandForwarder;
pub use video_search::{UnconfiguredSearch, VideoSearchPort};

#[cfg(test)]
pub use forwarder::MockCommandForwarder;
#[cfg(test)]
pub use video_search::MockVideoSearchPort;
