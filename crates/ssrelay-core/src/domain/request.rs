//! Validated command requests.
//!
//! Inbound arguments arrive as loose JSON. [`CommandRequest::parse`] checks
//! presence and type of every parameter (never business meaning, the display
//! platform owns that), applies defaults, and yields a typed request that
//! knows how to render the platform's `data` object.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::command::Command;
use crate::error::{RelayError, RelayResult};

fn default_toast_duration() -> String {
    "5".to_string()
}

fn default_long_duration() -> String {
    "30".to_string()
}

fn default_size() -> String {
    "3".to_string()
}

fn default_aniduration() -> String {
    "2".to_string()
}

fn default_app_duration() -> String {
    "0".to_string()
}

/// Parameters for `drop`: show media from a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropParams {
    pub display: String,
    pub item: String,
    #[serde(default)]
    pub x: i64,
    #[serde(default)]
    pub y: i64,
}

/// Parameters for `notify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyParams {
    pub display: String,
    pub message: String,
    pub priority: String,
}

/// Parameters for `toast`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastParams {
    pub display: String,
    pub message: String,
    pub heading: String,
    pub icon: String,
    pub transition: String,
    #[serde(default = "default_toast_duration")]
    pub duration: String,
}

/// Parameters for `marquee`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarqueeParams {
    pub display: String,
    pub message: String,
    #[serde(default = "default_long_duration")]
    pub duration: String,
    pub color: String,
    #[serde(default = "default_size")]
    pub size: String,
    pub bgcolor: String,
}

/// Parameters for `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextParams {
    pub display: String,
    pub message: String,
    #[serde(default = "default_long_duration")]
    pub duration: String,
    pub color: String,
    #[serde(default = "default_size")]
    pub size: String,
    pub bgcolor: String,
    pub align: String,
    pub frame: String,
    pub animate: String,
    #[serde(default = "default_aniduration")]
    pub aniduration: String,
}

/// Parameters for `app`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppParams {
    pub display: String,
    pub url: String,
    #[serde(default = "default_app_duration")]
    pub duration: String,
    pub frame: String,
}

/// Parameters shared by `touch`, `status` and `dj`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionParams {
    pub display: String,
    pub option: String,
    pub value: String,
}

/// A command together with its validated parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRequest {
    Drop(DropParams),
    Notify(NotifyParams),
    Toast(ToastParams),
    Marquee(MarqueeParams),
    Text(TextParams),
    App(AppParams),
    Touch(OptionParams),
    Status(OptionParams),
    Dj(OptionParams),
}

fn decode<T: DeserializeOwned>(command: Command, args: Value) -> RelayResult<T> {
    serde_json::from_value(args)
        .map_err(|e| RelayError::Validation(format!("invalid `{command}` parameters: {e}")))
}

impl CommandRequest {
    /// Validate raw arguments for `command`.
    ///
    /// `args` must be a JSON object; unknown keys are ignored.
    pub fn parse(command: Command, args: Value) -> RelayResult<Self> {
        if !args.is_object() {
            return Err(RelayError::Validation(format!(
                "`{command}` parameters must be a JSON object"
            )));
        }

        Ok(match command {
            Command::Drop => Self::Drop(decode(command, args)?),
            Command::Notify => Self::Notify(decode(command, args)?),
            Command::Toast => Self::Toast(decode(command, args)?),
            Command::Marquee => Self::Marquee(decode(command, args)?),
            Command::Text => Self::Text(decode(command, args)?),
            Command::App => Self::App(decode(command, args)?),
            Command::Touch => Self::Touch(decode(command, args)?),
            Command::Status => Self::Status(decode(command, args)?),
            Command::Dj => Self::Dj(decode(command, args)?),
        })
    }

    /// The command this request carries.
    pub const fn command(&self) -> Command {
        match self {
            Self::Drop(_) => Command::Drop,
            Self::Notify(_) => Command::Notify,
            Self::Toast(_) => Command::Toast,
            Self::Marquee(_) => Command::Marquee,
            Self::Text(_) => Command::Text,
            Self::App(_) => Command::App,
            Self::Touch(_) => Command::Touch,
            Self::Status(_) => Command::Status,
            Self::Dj(_) => Command::Dj,
        }
    }

    /// Name of the target screen.
    pub fn display(&self) -> &str {
        match self {
            Self::Drop(p) => &p.display,
            Self::Notify(p) => &p.display,
            Self::Toast(p) => &p.display,
            Self::Marquee(p) => &p.display,
            Self::Text(p) => &p.display,
            Self::App(p) => &p.display,
            Self::Touch(p) | Self::Status(p) | Self::Dj(p) => &p.display,
        }
    }

    /// The platform's `data` object for this command.
    pub fn platform_data(&self) -> Value {
        let cmd = self.command().name();
        match self {
            Self::Drop(p) => json!({
                "cmd": cmd,
                "type": "url",
                "src": [p.item],
                "duration": "0",
                "frame": "main",
                "animate": "fade",
                "aniduration": "2",
                "pmode": "loop",
                "bgcolor": "white",
            }),
            Self::Notify(p) => json!({
                "cmd": cmd,
                "msg": p.message,
                "duration": "30",
                "color": "blue",
                "size": "3",
            }),
            Self::Toast(p) => json!({
                "cmd": cmd,
                "msg": p.message,
                "heading": p.heading,
                "icon": p.icon,
                "transition": p.transition,
                "duration": p.duration,
            }),
            Self::Marquee(p) => json!({
                "cmd": cmd,
                "msg": p.message,
                "duration": p.duration,
                "color": p.color,
                "size": p.size,
                "bgcolor": p.bgcolor,
            }),
            Self::Text(p) => json!({
                "cmd": cmd,
                "msg": p.message,
                "duration": p.duration,
                "color": p.color,
                "size": p.size,
                "bgcolor": p.bgcolor,
                "align": p.align,
                "frame": p.frame,
                "animate": p.animate,
                "aniduration": p.aniduration,
            }),
            Self::App(p) => json!({
                "cmd": cmd,
                "url": p.url,
                "duration": p.duration,
                "frame": p.frame,
            }),
            Self::Touch(p) | Self::Status(p) | Self::Dj(p) => json!({
                "cmd": cmd,
                "option": p.option,
                "value": p.value,
            }),
        }
    }

    /// Fields echoed back to the caller on success.
    pub fn echo(&self) -> Map<String, Value> {
        let echo = match self {
            Self::Drop(p) => json!({ "item": p.item, "x": p.x, "y": p.y }),
            Self::Notify(p) => json!({ "notification": p.message }),
            Self::Toast(p) => json!({ "toast": p.message }),
            Self::Marquee(p) => json!({ "marquee": p.message }),
            Self::Text(p) => json!({ "text": p.message }),
            Self::App(p) => json!({ "url": p.url }),
            Self::Touch(p) | Self::Status(p) | Self::Dj(p) => {
                json!({ "option": p.option, "value": p.value })
            }
        };
        match echo {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}
