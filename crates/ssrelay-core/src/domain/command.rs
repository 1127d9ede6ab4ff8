//! The fixed set of remote-control commands.
//!
//! A [`Command`] is the handler value both surfaces dispatch on: the HTTP
//! router maps `POST <command.path()>` to it, the tool adapter maps
//! `command.name()` to it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::schema::{ParamDefault, ParamKind, ParamSpec};
use crate::error::RelayError;

/// A named remote-control command understood by the display platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Drop,
    Notify,
    Toast,
    Marquee,
    Text,
    App,
    Touch,
    Status,
    Dj,
}

impl Command {
    /// Every command, in the order they are exposed.
    pub const ALL: [Self; 9] = [
        Self::Drop,
        Self::Notify,
        Self::Toast,
        Self::Marquee,
        Self::Text,
        Self::App,
        Self::Touch,
        Self::Status,
        Self::Dj,
    ];

    /// Wire name of the command (also the tool name and the `cmd` field).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Notify => "notify",
            Self::Toast => "toast",
            Self::Marquee => "marquee",
            Self::Text => "text",
            Self::App => "app",
            Self::Touch => "touch",
            Self::Status => "status",
            Self::Dj => "dj",
        }
    }

    /// HTTP path the command is mounted on.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Drop => "/drop",
            Self::Notify => "/notify",
            Self::Toast => "/toast",
            Self::Marquee => "/marquee",
            Self::Text => "/text",
            Self::App => "/app",
            Self::Touch => "/touch",
            Self::Status => "/status",
            Self::Dj => "/dj",
        }
    }

    /// Look up a command by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Message returned to the caller when the platform accepts the command.
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Drop => "Item dropped successfully",
            Self::Notify => "Notification sent successfully",
            Self::Toast => "Toast displayed successfully",
            Self::Marquee => "Marquee displayed successfully",
            Self::Text => "Text displayed successfully",
            Self::App => "App launched successfully",
            Self::Touch => "Touch command executed successfully",
            Self::Status => "Status command executed successfully",
            Self::Dj => "DJ command executed successfully",
        }
    }

    /// Tool description shown to automated callers.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Drop => {
                "Display an image or video on a screen. Use it to show media content \
                 (video, slideshow, static image) in the main frame; the media plays \
                 to its end and loops."
            }
            Self::Notify => {
                "Show a notification banner with simple text, without interrupting \
                 the main screen content."
            }
            Self::Toast => {
                "Show a transient popup message with a heading, an icon (info, warning, \
                 error, success) and a transition (plain, fade, slide)."
            }
            Self::Marquee => {
                "Scroll text across the screen, e.g. a news ticker or a running \
                 announcement, with text color, size and background color."
            }
            Self::Text => {
                "Show a static block of styled text in a frame for a set duration, \
                 with alignment and an entry animation."
            }
            Self::App => {
                "Load and display a web page inside a frame. A duration of 0 keeps it \
                 on screen indefinitely."
            }
            Self::Touch => {
                "Send a playback or control command (playnext, mute, console, ...) with \
                 an optional value, without reloading the main content."
            }
            Self::Status => {
                "Request status information from a screen (frame, ver, devinfo), with \
                 an optional value such as the frame to inspect."
            }
            Self::Dj => {
                "Manage screen-level features: logo, kiosk mode, startup or scheduled \
                 commands (startcmd, schcmd) and restart."
            }
        }
    }

    /// Parameter contract for the command, shared by validation docs and tool schemas.
    pub const fn params(self) -> &'static [ParamSpec] {
        match self {
            Self::Drop => DROP_PARAMS,
            Self::Notify => NOTIFY_PARAMS,
            Self::Toast => TOAST_PARAMS,
            Self::Marquee => MARQUEE_PARAMS,
            Self::Text => TEXT_PARAMS,
            Self::App => APP_PARAMS,
            Self::Touch | Self::Status | Self::Dj => OPTION_PARAMS,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| RelayError::UnknownCommand(s.to_string()))
    }
}

const DISPLAY: ParamSpec = ParamSpec::required(
    "display",
    ParamKind::String,
    "Name of the target screen",
);

const MESSAGE: ParamSpec = ParamSpec::required("message", ParamKind::String, "Text to display");

const DROP_PARAMS: &[ParamSpec] = &[
    DISPLAY,
    ParamSpec::required("item", ParamKind::String, "URL of the image or video to show"),
    ParamSpec::optional("x", ParamKind::Integer, ParamDefault::Int(0), "Horizontal coordinate"),
    ParamSpec::optional("y", ParamKind::Integer, ParamDefault::Int(0), "Vertical coordinate"),
];

const NOTIFY_PARAMS: &[ParamSpec] = &[
    DISPLAY,
    MESSAGE,
    ParamSpec::required("priority", ParamKind::String, "Notification priority"),
];

const TOAST_PARAMS: &[ParamSpec] = &[
    DISPLAY,
    MESSAGE,
    ParamSpec::required("heading", ParamKind::String, "Toast title"),
    ParamSpec::required("icon", ParamKind::String, "info, warning, error or success"),
    ParamSpec::required("transition", ParamKind::String, "plain, fade or slide"),
    ParamSpec::optional(
        "duration",
        ParamKind::String,
        ParamDefault::Str("5"),
        "Seconds the toast stays visible",
    ),
];

const MARQUEE_PARAMS: &[ParamSpec] = &[
    DISPLAY,
    MESSAGE,
    ParamSpec::optional(
        "duration",
        ParamKind::String,
        ParamDefault::Str("30"),
        "Seconds to keep scrolling",
    ),
    ParamSpec::required("color", ParamKind::String, "Text color"),
    ParamSpec::optional("size", ParamKind::String, ParamDefault::Str("3"), "Text size"),
    ParamSpec::required("bgcolor", ParamKind::String, "Background color"),
];

const TEXT_PARAMS: &[ParamSpec] = &[
    DISPLAY,
    MESSAGE,
    ParamSpec::optional(
        "duration",
        ParamKind::String,
        ParamDefault::Str("30"),
        "Seconds the text stays on screen",
    ),
    ParamSpec::required("color", ParamKind::String, "Text color"),
    ParamSpec::optional("size", ParamKind::String, ParamDefault::Str("3"), "Text size"),
    ParamSpec::required("bgcolor", ParamKind::String, "Background color"),
    ParamSpec::required("align", ParamKind::String, "left, center or right"),
    ParamSpec::required("frame", ParamKind::String, "Target screen region (main, t1, t2, ...)"),
    ParamSpec::required("animate", ParamKind::String, "Entry animation (fade, slide, ...)"),
    ParamSpec::optional(
        "aniduration",
        ParamKind::String,
        ParamDefault::Str("2"),
        "Animation length in seconds",
    ),
];

const APP_PARAMS: &[ParamSpec] = &[
    DISPLAY,
    ParamSpec::required("url", ParamKind::String, "URL of the web page"),
    ParamSpec::optional(
        "duration",
        ParamKind::String,
        ParamDefault::Str("0"),
        "Seconds to display (0 = indefinite)",
    ),
    ParamSpec::required("frame", ParamKind::String, "Target screen region"),
];

const OPTION_PARAMS: &[ParamSpec] = &[
    DISPLAY,
    ParamSpec::required("option", ParamKind::String, "Sub-command to run"),
    ParamSpec::required("value", ParamKind::String, "Argument for the sub-command"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_paths_agree() {
        for command in Command::ALL {
            assert_eq!(command.path(), format!("/{}", command.name()));
            assert_eq!(Command::from_name(command.name()), Some(command));
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "reboot".parse::<Command>().unwrap_err();
        assert!(matches!(err, RelayError::UnknownCommand(name) if name == "reboot"));
    }

    #[test]
    fn test_every_command_requires_display() {
        for command in Command::ALL {
            let display = command.params().iter().find(|p| p.name == "display");
            assert!(display.is_some_and(|p| p.required), "{command} lacks display");
        }
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_string(&Command::Dj).unwrap();
        assert_eq!(json, "\"dj\"");
    }
}
