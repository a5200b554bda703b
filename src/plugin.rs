//! Plugin message runtime.
//!
//! Processes one [`UiMessage`] at a time against the host document:
//! validates the selection, parses the record, drives the renderer,
//! and surfaces the two user-facing failures as notifications. A
//! render either completes (success notification, close signal) or
//! fails fast before any mutation.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{DocuframeError, InputError};
use crate::host::PluginHost;
use crate::message::UiMessage;
use crate::render::{RenderReport, Renderer};
use crate::scene::{NodeKind, SceneDocument};

/// Notification shown when the selection precondition fails.
pub const NOTIFY_INVALID_SELECTION: &str = "Select exactly one root frame";

/// Notification shown when the render input is not valid JSON.
pub const NOTIFY_INVALID_JSON: &str = "Invalid JSON";

/// Notification shown after a successful render.
pub const NOTIFY_RENDERED: &str = "Documentation rendered";

/// Notification shown when the UI-side clipboard copy succeeded.
pub const NOTIFY_COPIED: &str = "Prompt copied to clipboard";

/// Notification shown on the manual-copy fallback path.
pub const NOTIFY_COPY_FALLBACK: &str =
    "Prompt text selected - Press Cmd+C (Mac) or Ctrl+C (Windows) to copy";

/// How long the manual-copy fallback node stays in the document.
pub const COPY_FALLBACK_TTL: Duration = Duration::from_secs(2);

/// What the caller should do after a message is handled.
#[derive(Debug)]
pub enum PluginControl {
    /// Keep the plugin open for further messages.
    Continue,
    /// Render finished; the plugin terminates with this report.
    Close(RenderReport),
}

/// The plugin runtime.
pub struct Plugin<H: PluginHost> {
    host: H,
    copy_fallback_ttl: Duration,
}

impl<H: PluginHost> Plugin<H> {
    /// Creates a plugin bridged by `host`.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self {
            host,
            copy_fallback_ttl: COPY_FALLBACK_TTL,
        }
    }

    /// Overrides the manual-copy fallback TTL (tests use zero).
    #[must_use]
    pub fn with_copy_fallback_ttl(mut self, ttl: Duration) -> Self {
        self.copy_fallback_ttl = ttl;
        self
    }

    /// Returns the host bridge.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Handles one message to completion.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when a render is rejected before any
    /// mutation, or a host error when a host call fails mid-render.
    pub async fn handle_message(
        &self,
        doc: &mut SceneDocument,
        message: UiMessage,
    ) -> Result<PluginControl, DocuframeError> {
        match message {
            UiMessage::OpenUrl { url } => {
                debug!(url, "opening external link");
                self.host.open_external(&url);
                Ok(PluginControl::Continue)
            }
            UiMessage::CopyPrompt { success: true, .. } => {
                self.host.notify(NOTIFY_COPIED);
                Ok(PluginControl::Continue)
            }
            UiMessage::CopyPrompt { success: false, text } => {
                self.copy_fallback(doc, &text.unwrap_or_default()).await?;
                Ok(PluginControl::Continue)
            }
            UiMessage::Render { json } => {
                let report = self.render(doc, &json).await?;
                Ok(PluginControl::Close(report))
            }
        }
    }

    /// Manual-copy fallback: a selectable temporary text node that
    /// removes itself after the TTL.
    async fn copy_fallback(
        &self,
        doc: &mut SceneDocument,
        text: &str,
    ) -> Result<(), DocuframeError> {
        let node = doc.create_text();
        let font = doc.font(&node);
        self.host.load_font(&font).await?;
        doc.set_characters(&node, text);

        doc.set_selection(vec![node.clone()]);
        self.host.scroll_into_view(&[node.clone()]);
        self.host.notify(NOTIFY_COPY_FALLBACK);

        tokio::time::sleep(self.copy_fallback_ttl).await;
        doc.remove_subtree(&node);
        Ok(())
    }

    async fn render(
        &self,
        doc: &mut SceneDocument,
        json: &str,
    ) -> Result<RenderReport, DocuframeError> {
        let selection = doc.selection().to_vec();
        let root = match selection.as_slice() {
            [only] if doc.get(only).is_some_and(|n| n.kind == NodeKind::Frame) => only.clone(),
            _ => {
                self.host.notify(NOTIFY_INVALID_SELECTION);
                return Err(InputError::InvalidSelection.into());
            }
        };

        let value: Value = match serde_json::from_str(json) {
            Ok(value) => value,
            Err(err) => {
                self.host.notify(NOTIFY_INVALID_JSON);
                return Err(InputError::InvalidJson(err).into());
            }
        };

        let report = Renderer::new(doc, &self.host).render(&value, &root).await?;
        info!(filled = report.filled(), "documentation rendered");
        self.host.notify(NOTIFY_RENDERED);
        Ok(report)
    }
}
