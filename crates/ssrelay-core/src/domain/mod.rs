//! Domain types for the relay.
//!
//! Everything here is request-scoped and immutable once built.

mod command;
mod credential;
mod outcome;
mod request;
mod schema;

pub use command::Command;
pub use credential::{ApiKey, AuthorizedCommand, ServiceCredential, attach_credential};
pub use outcome::{CommandOutcome, PlatformReply, VideoLink, VideoMatch};
pub use request::{
    AppParams, CommandRequest, DropParams, MarqueeParams, NotifyParams, OptionParams, TextParams,
    ToastParams,
};
pub use schema::{ParamDefault, ParamKind, ParamSpec, input_schema};
