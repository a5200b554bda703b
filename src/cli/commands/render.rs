//! `render` command handler.
//!
//! Loads a template scene and a documentation record, drives the
//! plugin's render path with a recording host, and writes the mutated
//! scene back out.

use tracing::{debug, info};

use crate::cli::args::RenderArgs;
use crate::error::DocuframeError;
use crate::host::RecordingHost;
use crate::message::UiMessage;
use crate::plugin::{Plugin, PluginControl};
use crate::scene::SceneFile;

/// Render a documentation record into a template scene file.
///
/// # Errors
///
/// Returns an input error when the record is rejected (invalid JSON,
/// invalid selection in the scene file), a scene error when the
/// template file is malformed, or an I/O error on file access.
pub async fn run(args: &RenderArgs) -> Result<(), DocuframeError> {
    info!(template = %args.template.display(), "loading template scene");
    let template_text = tokio::fs::read_to_string(&args.template).await?;
    let scene_file: SceneFile = serde_json::from_str(&template_text)?;
    let mut doc = scene_file.into_document()?;

    let record_text = tokio::fs::read_to_string(&args.doc).await?;

    let plugin = Plugin::new(RecordingHost::new());
    let result = plugin
        .handle_message(&mut doc, UiMessage::Render { json: record_text })
        .await;

    for notification in plugin.host().notifications() {
        info!("{notification}");
    }

    let PluginControl::Close(report) = result? else {
        return Ok(());
    };

    for field in &report.fields {
        debug!(key = %field.key, outcome = ?field.outcome, "field outcome");
    }
    info!(
        filled = report.filled(),
        skipped = report.skipped(),
        "render complete"
    );

    let rendered = SceneFile::from_document(&doc);
    let json = serde_json::to_string_pretty(&rendered)?;
    match &args.out {
        Some(path) => tokio::fs::write(path, json).await?,
        None => println!("{json}"),
    }
    Ok(())
}
