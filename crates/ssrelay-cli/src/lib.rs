#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

// Used by the main.rs binary
use anyhow as _;
use dotenvy as _;
use tokio as _;
use tokio_util as _;
use tracing as _;

pub mod parser;
pub mod telemetry;

pub use parser::Cli;
pub use telemetry::init_tracing;
