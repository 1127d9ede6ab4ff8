//! HTTP handlers, one module per surface.

pub mod commands;
pub mod mcp;
pub mod meta;
pub mod search;
