//! Host bridge.
//!
//! The operations the plugin does not own: font loading, user
//! notifications, external links, and viewport focus. Everything the
//! renderer awaits goes through [`PluginHost`]; the crate ships a
//! recording implementation used by the CLI and tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::HostError;
use crate::scene::{FontName, NodeId};

/// Bridge to the embedding host.
///
/// Implementations must be cheap to call; the renderer awaits host
/// calls one at a time and never retries.
#[async_trait]
pub trait PluginHost: Send + Sync {
    /// Loads a font, which the host requires before any text mutation.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the host rejects the load; the
    /// remaining render aborts.
    async fn load_font(&self, font: &FontName) -> Result<(), HostError>;

    /// Shows a toast-style notification to the user.
    fn notify(&self, message: &str);

    /// Opens an external URL.
    fn open_external(&self, url: &str);

    /// Scrolls the viewport to bring the given nodes into view.
    fn scroll_into_view(&self, ids: &[NodeId]);
}

/// One recorded host call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// A font load completed.
    FontLoaded(FontName),
    /// A notification was shown.
    Notified(String),
    /// An external URL was opened.
    OpenedExternal(String),
    /// The viewport was scrolled to the given nodes.
    ScrolledIntoView(Vec<NodeId>),
}

/// In-memory host that records every call.
///
/// Font loads succeed unless the host was built with
/// [`RecordingHost::with_failing_fonts`].
#[derive(Debug, Default)]
pub struct RecordingHost {
    calls: Mutex<Vec<HostCall>>,
    fail_font_loads: bool,
}

impl RecordingHost {
    /// Creates a recording host whose calls all succeed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recording host that rejects every font load.
    #[must_use]
    pub fn with_failing_fonts() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_font_loads: true,
        }
    }

    /// Returns a snapshot of all recorded calls, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    /// Returns the notification messages shown so far, in order.
    #[must_use]
    pub fn notifications(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostCall::Notified(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: HostCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl PluginHost for RecordingHost {
    async fn load_font(&self, font: &FontName) -> Result<(), HostError> {
        if self.fail_font_loads {
            return Err(HostError::FontLoad {
                family: font.family.clone(),
                style: font.style.clone(),
                message: "font load rejected".to_string(),
            });
        }
        self.record(HostCall::FontLoaded(font.clone()));
        Ok(())
    }

    fn notify(&self, message: &str) {
        self.record(HostCall::Notified(message.to_string()));
    }

    fn open_external(&self, url: &str) {
        self.record(HostCall::OpenedExternal(url.to_string()));
    }

    fn scroll_into_view(&self, ids: &[NodeId]) {
        self.record(HostCall::ScrolledIntoView(ids.to_vec()));
    }
}
