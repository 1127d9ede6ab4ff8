//! `CommandForwarder` implementation for `SmartScreenClient`.

use async_trait::async_trait;
use ssrelay_core::{AuthorizedCommand, CommandForwarder, PlatformReply, RelayError, RelayResult};
use tracing::debug;

use crate::client::SmartScreenClient;
use crate::error::SmartScreenError;
use crate::http::HttpBackend;

/// Convert internal `SmartScreenError` to the core relay taxonomy.
fn map_error(err: SmartScreenError) -> RelayError {
    match err {
        SmartScreenError::ApiRequestFailed { status, body } => {
            RelayError::UpstreamStatus { status, body }
        }
        SmartScreenError::Rejected { code, message } => RelayError::Rejected { code, message },
        SmartScreenError::InvalidResponse { message } => RelayError::MalformedResponse(message),
        SmartScreenError::Network(e) if e.is_timeout() => RelayError::Timeout(e.to_string()),
        SmartScreenError::Network(e) => RelayError::Transport(e.to_string()),
        SmartScreenError::InvalidUrl(e) => RelayError::Configuration(e.to_string()),
    }
}

#[async_trait]
impl<B: HttpBackend + 'static> CommandForwarder for SmartScreenClient<B> {
    async fn perform(&self, command: AuthorizedCommand) -> RelayResult<PlatformReply> {
        debug!(
            command = %command.request().command(),
            endpoint = %self.endpoint(),
            "Posting command to SmartScreen"
        );
        self.send(&command).await.map_err(map_error)
    }
}
