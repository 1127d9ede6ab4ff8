//! Tool catalog.
//!
//! Every display command is a tool of the same name whose input schema is
//! rendered from the command's parameter list, so both surfaces share one
//! contract.

use ssrelay_core::domain::{ParamKind, input_schema};
use ssrelay_core::{Command, ParamSpec};

use crate::protocol::ToolDefinition;

pub const SEARCH_TOOL: &str = "search_youtube";

const SEARCH_PARAMS: &[ParamSpec] = &[ParamSpec::required(
    "query",
    ParamKind::String,
    "Search terms; the first video ranked by relevance is returned",
)];

/// A resolved tool name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Command(Command),
    SearchYoutube,
}

impl Tool {
    pub fn from_name(name: &str) -> Option<Self> {
        if name == SEARCH_TOOL {
            return Some(Self::SearchYoutube);
        }
        Command::from_name(name).map(Self::Command)
    }
}

/// All advertised tools, commands first in catalog order.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    let mut tools: Vec<ToolDefinition> = Command::ALL
        .iter()
        .map(|cmd| ToolDefinition {
            name: cmd.name().to_string(),
            description: cmd.description().to_string(),
            input_schema: input_schema(cmd.params()),
        })
        .collect();

    tools.push(ToolDefinition {
        name: SEARCH_TOOL.to_string(),
        description: "Search YouTube and return the URL of the most relevant video".to_string(),
        input_schema: input_schema(SEARCH_PARAMS),
    });
    tools
}
