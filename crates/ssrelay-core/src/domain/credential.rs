//! Secrets and credential attachment.
//!
//! [`ServiceCredential`] and [`ApiKey`] are loaded once at startup and never
//! change afterwards. Their `Debug` output is redacted so they cannot leak
//! into logs through `?field` formatting.

use std::fmt;
use std::sync::Arc;

use serde_json::{Value, json};

use super::request::CommandRequest;
use crate::error::{RelayError, RelayResult};

fn non_blank(value: String, what: &str) -> RelayResult<Arc<str>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RelayError::Configuration(format!("{what} is empty")));
    }
    Ok(Arc::from(trimmed))
}

/// Bearer token authorizing calls to the display platform.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceCredential(Arc<str>);

impl ServiceCredential {
    /// Wrap a token, rejecting blank values.
    pub fn new(token: impl Into<String>) -> RelayResult<Self> {
        non_blank(token.into(), "display platform service token").map(Self)
    }

    /// Raw token value. Only the forwarder should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ServiceCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ServiceCredential(<redacted>)")
    }
}

/// API key for the video-search provider.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    /// Wrap a key, rejecting blank values.
    pub fn new(key: impl Into<String>) -> RelayResult<Self> {
        non_blank(key.into(), "video search API key").map(Self)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// A validated command paired with the credential that authorizes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedCommand {
    request: CommandRequest,
    credential: ServiceCredential,
}

impl AuthorizedCommand {
    pub const fn request(&self) -> &CommandRequest {
        &self.request
    }

    /// `Authorization` header value for the outbound call.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.credential.expose())
    }

    /// Outbound JSON body: `{"to": {"name": display}, "data": {...}}`.
    pub fn envelope(&self) -> Value {
        json!({
            "to": { "name": self.request.display() },
            "data": self.request.platform_data(),
        })
    }
}

/// Attach the configured credential to a request.
///
/// Pure: no I/O, no per-request credential selection.
pub fn attach_credential(
    request: CommandRequest,
    credential: &ServiceCredential,
) -> AuthorizedCommand {
    AuthorizedCommand {
        request,
        credential: credential.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::command::Command;

    #[test]
    fn test_blank_credential_rejected() {
        assert!(matches!(
            ServiceCredential::new("   "),
            Err(RelayError::Configuration(_))
        ));
        assert!(matches!(ApiKey::new(""), Err(RelayError::Configuration(_))));
    }

    #[test]
    fn test_debug_is_redacted() {
        let credential = ServiceCredential::new("s3cret-token").unwrap();
        let key = ApiKey::new("AIza-key").unwrap();
        let rendered = format!("{credential:?} {key:?}");
        assert!(!rendered.contains("s3cret-token"));
        assert!(!rendered.contains("AIza-key"));
        assert!(rendered.contains("redacted"));
    }

    #[test]
    fn test_credential_is_trimmed() {
        let credential = ServiceCredential::new("  abc \n").unwrap();
        assert_eq!(credential.expose(), "abc");
    }

    #[test]
    fn test_attach_credential_builds_envelope() {
        let request = CommandRequest::parse(
            Command::Notify,
            json!({ "display": "foyer", "message": "Doors open", "priority": "high" }),
        )
        .unwrap();
        let credential = ServiceCredential::new("tok").unwrap();

        let authorized = attach_credential(request.clone(), &credential);

        assert_eq!(authorized.request(), &request);
        assert_eq!(authorized.authorization(), "Bearer tok");
        assert_eq!(
            authorized.envelope(),
            json!({
                "to": { "name": "foyer" },
                "data": {
                    "cmd": "notify",
                    "msg": "Doors open",
                    "duration": "30",
                    "color": "blue",
                    "size": "3",
                },
            })
        );
    }
}
