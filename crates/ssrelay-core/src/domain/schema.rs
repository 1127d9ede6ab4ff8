//! Declarative parameter contracts.
//!
//! Each command publishes a static list of [`ParamSpec`]s. The tool adapter
//! renders them as JSON Schema; the typed parameter structs in
//! [`super::request`] enforce the same contract at parse time.

use serde_json::{Map, Value, json};

/// JSON type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
}

impl ParamKind {
    /// JSON Schema `type` keyword.
    pub const fn schema_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
        }
    }
}

/// Default applied when an optional parameter is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDefault {
    Str(&'static str),
    Int(i64),
}

impl ParamDefault {
    pub fn to_json(self) -> Value {
        match self {
            Self::Str(s) => Value::from(s),
            Self::Int(n) => Value::from(n),
        }
    }
}

/// One named parameter of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub default: Option<ParamDefault>,
    pub description: &'static str,
}

impl ParamSpec {
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
            description,
        }
    }

    pub const fn optional(
        name: &'static str,
        kind: ParamKind,
        default: ParamDefault,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: Some(default),
            description,
        }
    }
}

/// Render a parameter list as a JSON Schema object.
pub fn input_schema(params: &[ParamSpec]) -> Value {
    let mut properties = Map::new();
    for param in params {
        let mut property = Map::new();
        property.insert("type".into(), Value::from(param.kind.schema_type()));
        property.insert("description".into(), Value::from(param.description));
        if let Some(default) = param.default {
            property.insert("default".into(), default.to_json());
        }
        properties.insert(param.name.into(), Value::Object(property));
    }

    let required: Vec<&str> = params
        .iter()
        .filter(|p| p.required)
        .map(|p| p.name)
        .collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}
