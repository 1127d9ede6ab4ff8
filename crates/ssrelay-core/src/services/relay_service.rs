//! The relay orchestrator shared by every inbound surface.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{info, warn};

use crate::domain::{
    Command, CommandOutcome, CommandRequest, ServiceCredential, VideoLink, attach_credential,
};
use crate::error::{RelayError, RelayResult};
use crate::ports::{CommandForwarder, VideoSearchPort};

/// Validates, authorizes and forwards commands; relays video searches.
///
/// Holds only read-only configuration and port handles, so a single
/// instance is shared across all concurrent requests.
pub struct RelayService {
    credential: ServiceCredential,
    forwarder: Arc<dyn CommandForwarder>,
    search: Arc<dyn VideoSearchPort>,
}

impl RelayService {
    pub fn new(
        credential: ServiceCredential,
        forwarder: Arc<dyn CommandForwarder>,
        search: Arc<dyn VideoSearchPort>,
    ) -> Self {
        Self {
            credential,
            forwarder,
            search,
        }
    }

    /// Relay `command` with raw JSON arguments.
    ///
    /// Validation happens before any outbound call.
    pub async fn execute(&self, command: Command, args: Value) -> RelayResult<CommandOutcome> {
        let request = CommandRequest::parse(command, args)?;
        let screen = request.display().to_string();
        let authorized = attach_credential(request, &self.credential);

        let start = Instant::now();
        let result = self.forwarder.perform(authorized.clone()).await;
        let elapsed_ms = start.elapsed().as_millis();

        match result {
            Ok(reply) => {
                info!(
                    command = %command,
                    display = %screen,
                    status = reply.status,
                    elapsed_ms = %elapsed_ms,
                    "Command relayed"
                );
                Ok(CommandOutcome::new(authorized.request(), reply))
            }
            Err(e) => {
                warn!(
                    command = %command,
                    display = %screen,
                    elapsed_ms = %elapsed_ms,
                    error = %e,
                    "Command relay failed"
                );
                Err(e)
            }
        }
    }

    /// Relay a command looked up by wire name.
    pub async fn execute_named(&self, name: &str, args: Value) -> RelayResult<CommandOutcome> {
        let command: Command = name.parse()?;
        self.execute(command, args).await
    }

    /// Search for a video and return the provider's first result as a URL.
    pub async fn search_video(&self, query: &str) -> RelayResult<VideoLink> {
        if query.trim().is_empty() {
            return Err(RelayError::Validation(
                "query must not be empty".to_string(),
            ));
        }

        let hit = self
            .search
            .first_match(query)
            .await?
            .ok_or_else(|| RelayError::NoResults(query.to_string()))?;

        info!(query = %query, video_id = %hit.video_id, "Video search relayed");
        Ok(VideoLink::from(&hit))
    }
}
