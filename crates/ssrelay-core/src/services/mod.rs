//! Core services - the relay's orchestration layer.
//!
//! Services orchestrate between ports and domain logic and know nothing
//! about concrete transports.

mod relay_service;

pub use relay_service::RelayService;
