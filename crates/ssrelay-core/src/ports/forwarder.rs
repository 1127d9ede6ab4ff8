//! Port for the outbound call to the display platform.

use async_trait::async_trait;

use crate::domain::{AuthorizedCommand, PlatformReply};
use crate::error::RelayResult;

/// Performs exactly one outbound call per command.
///
/// Implementations must not retry. Connection failures, non-success
/// statuses, malformed bodies and platform-level rejections are all
/// returned as [`crate::RelayError`] relay variants.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandForwarder: Send + Sync {
    async fn perform(&self, command: AuthorizedCommand) -> RelayResult<PlatformReply>;
}
