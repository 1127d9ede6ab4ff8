//! Recording test doubles for the ports.
//!
//! Enabled for downstream crates through the `test-utils` feature.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::domain::{AuthorizedCommand, PlatformReply, VideoMatch};
use crate::error::{RelayError, RelayResult};
use crate::ports::{CommandForwarder, VideoSearchPort};

/// One outbound call observed by [`RecordingForwarder`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub authorization: String,
    pub envelope: Value,
}

/// Forwarder that records every call and answers with a canned reply.
pub struct RecordingForwarder {
    calls: Mutex<Vec<RecordedCall>>,
    reply: Box<dyn Fn() -> RelayResult<PlatformReply> + Send + Sync>,
    latency: Option<Duration>,
}

impl RecordingForwarder {
    /// Accepts every command with `{"ErrCode": 0, "ErrMsg": "OK"}`.
    pub fn accepting() -> Self {
        Self::with_reply(|| {
            Ok(PlatformReply {
                status: 200,
                body: json!({ "ErrCode": 0, "ErrMsg": "OK" }),
            })
        })
    }

    /// Fails every command with the error produced by `make_error`.
    pub fn failing(make_error: impl Fn() -> RelayError + Send + Sync + 'static) -> Self {
        Self::with_reply(move || Err(make_error()))
    }

    pub fn with_reply(
        reply: impl Fn() -> RelayResult<PlatformReply> + Send + Sync + 'static,
    ) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Box::new(reply),
            latency: None,
        }
    }

    /// Delay each reply, simulating a slow platform.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

#[async_trait]
impl CommandForwarder for RecordingForwarder {
    async fn perform(&self, command: AuthorizedCommand) -> RelayResult<PlatformReply> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                authorization: command.authorization(),
                envelope: command.envelope(),
            });
        }
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        (self.reply)()
    }
}

/// Search port returning a fixed first result and counting calls.
pub struct StaticSearch {
    hit: Option<String>,
    calls: AtomicUsize,
}

impl StaticSearch {
    pub fn returning(video_id: impl Into<String>) -> Self {
        Self {
            hit: Some(video_id.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub const fn empty() -> Self {
        Self {
            hit: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VideoSearchPort for StaticSearch {
    async fn first_match(&self, _query: &str) -> RelayResult<Option<VideoMatch>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.hit.clone().map(|video_id| VideoMatch { video_id }))
    }
}
