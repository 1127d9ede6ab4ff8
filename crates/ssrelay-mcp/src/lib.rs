#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::McpError;
pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION};
pub use server::McpServer;
pub use tools::{SEARCH_TOOL, Tool, tool_definitions};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
