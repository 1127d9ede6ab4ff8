//! Results handed back to callers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::command::Command;
use super::request::CommandRequest;

/// What the display platform answered for an accepted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformReply {
    /// HTTP status of the platform response.
    pub status: u16,
    /// Parsed JSON body, relayed to the caller as `upstream`.
    pub body: Value,
}

/// Result of a relayed command, ready to be rendered by an adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub command: Command,
    pub echo: Map<String, Value>,
    pub upstream: PlatformReply,
}

impl CommandOutcome {
    pub fn new(request: &CommandRequest, upstream: PlatformReply) -> Self {
        Self {
            command: request.command(),
            echo: request.echo(),
            upstream,
        }
    }

    /// Response body: `{"message": ..., <echo fields>, "upstream": <platform JSON>}`.
    pub fn into_body(self) -> Value {
        let mut body = Map::new();
        body.insert(
            "message".into(),
            Value::from(self.command.success_message()),
        );
        body.extend(self.echo);
        body.insert("upstream".into(), self.upstream.body);
        Value::Object(body)
    }
}

/// First search hit as ranked by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMatch {
    pub video_id: String,
}

impl VideoMatch {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

/// Response body of the search operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoLink {
    pub video_url: String,
}

impl From<&VideoMatch> for VideoLink {
    fn from(hit: &VideoMatch) -> Self {
        Self {
            video_url: hit.watch_url(),
        }
    }
}
