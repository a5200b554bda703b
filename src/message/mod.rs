//! Host message protocol.
//!
//! The UI side of the plugin posts one message at a time; the kind is
//! carried in a `"type"` tag. Unknown kinds fail to parse.

use serde::{Deserialize, Serialize};

/// A message posted from the plugin UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiMessage {
    /// Ask the host to open an external link; no result expected.
    #[serde(rename = "OPEN_URL")]
    OpenUrl {
        /// Link target
        url: String,
    },

    /// Clipboard copy result from the UI.
    ///
    /// On failure the plugin falls back to a selectable temporary
    /// text node carrying `text`.
    #[serde(rename = "COPY_PROMPT")]
    CopyPrompt {
        /// Whether the UI-side copy succeeded
        success: bool,
        /// Prompt text for the fallback path
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },

    /// Render a documentation record into the selected template.
    #[serde(rename = "RENDER")]
    Render {
        /// The record as raw JSON text
        json: String,
    },
}
