/// Messages for the host page: tooltip, info panel, notifications, control sync.

use serde::Serialize;
use crate::params::ControlId;
use crate::selection::PanelContent;

pub const HELP_TEXT: &str = "Controls: Mouse to look around, Scroll to zoom, Click to select planet";
pub const WELCOME_TEXT: &str = "Press H for help";
pub const NOTIFY_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiMessage {
    /// Tooltip text at a pixel position.
    ShowTooltip { text: String, x: f32, y: f32 },
    HideTooltip,
    ShowPanel(PanelContent),
    HidePanel,
    /// Transient notification.
    Notify { message: String, duration_ms: u32 },
    /// Value label next to a range control.
    SetLabel { control: ControlId, text: String },
    /// Checkbox state for a toggle.
    SetToggle { control: ControlId, checked: bool },
}

impl UiMessage {
    pub fn notify(message: &str) -> Self {
        UiMessage::Notify {
            message: message.to_string(),
            duration_ms: NOTIFY_MS,
        }
    }
}
