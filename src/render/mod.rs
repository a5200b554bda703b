//! The template renderer.
//!
//! Walks an arbitrary JSON value against a scope node in the
//! pre-authored template tree, mutating the template in place: text
//! nodes are filled by name match, arrays become cloned list items,
//! an `appliedTo` object becomes a hyperlinked field, and a `nodeId`
//! spawns a live instance preview.
//!
//! Every lookup failure is a silent no-op recorded in the
//! [`RenderReport`]; the renderer never raises for template-shape
//! mismatches. The only errors that propagate are rejected host
//! calls.

pub mod matchers;
pub mod report;

pub use matchers::{NameIndex, find_descendant, find_text_descendant};
pub use report::{FieldOutcome, FieldRecord, RenderReport};

use std::future::Future;
use std::pin::Pin;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::HostError;
use crate::host::PluginHost;
use crate::scene::{Hyperlink, NodeId, NodeKind, SceneDocument};

/// Placeholder text for absent or empty values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Builds a deep link into the current document for a node id.
#[must_use]
pub fn deep_link(file_key: &str, node_id: &str) -> String {
    format!("https://www.figma.com/file/{file_key}?node-id={node_id}")
}

/// One render pass over a document.
///
/// Holds the document and host for the duration of the pass and
/// accumulates the outcome report.
pub struct Renderer<'a, H: PluginHost> {
    doc: &'a mut SceneDocument,
    host: &'a H,
    report: RenderReport,
}

impl<'a, H: PluginHost> Renderer<'a, H> {
    /// Creates a renderer over `doc` bridged by `host`.
    pub fn new(doc: &'a mut SceneDocument, host: &'a H) -> Self {
        Self {
            doc,
            host,
            report: RenderReport::new(),
        }
    }

    /// Renders `value` into the subtree rooted at `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if a host call is rejected mid-pass;
    /// mutations made up to that point remain in place.
    pub async fn render(mut self, value: &Value, scope: &NodeId) -> Result<RenderReport, HostError> {
        let index = NameIndex::build(self.doc, scope);
        self.render_value(value, scope, &index).await?;
        self.report.finish();
        debug!(
            filled = self.report.filled(),
            skipped = self.report.skipped(),
            "render pass complete"
        );
        Ok(self.report)
    }

    async fn render_value(
        &mut self,
        value: &Value,
        scope: &NodeId,
        index: &NameIndex,
    ) -> Result<(), HostError> {
        match value {
            Value::Object(map) => {
                for (key, entry) in map {
                    self.render_entry(key, entry, scope, index).await?;
                }
            }
            // A bare sequence renders like a mapping keyed by position.
            Value::Array(items) => {
                for (i, entry) in items.iter().enumerate() {
                    self.render_entry(&i.to_string(), entry, scope, index).await?;
                }
            }
            // A bare scalar has no key to match.
            _ => {}
        }
        Ok(())
    }

    async fn render_entry(
        &mut self,
        key: &str,
        value: &Value,
        scope: &NodeId,
        index: &NameIndex,
    ) -> Result<(), HostError> {
        match value {
            Value::Array(items) => self.render_array(key, items, index).await,
            Value::Object(map) => {
                if key == "appliedTo" {
                    self.render_applied_to(map, index).await
                } else {
                    // Nested mappings flatten into the same scope;
                    // matching stays name-based, not structural.
                    self.render_value_boxed(value, scope, index).await
                }
            }
            scalar => {
                // nodeId is metadata for instance previews, never displayed
                if key == "nodeId" {
                    return Ok(());
                }
                self.render_scalar(key, scalar, index).await
            }
        }
    }

    /// Indirection for async recursion.
    fn render_value_boxed<'s>(
        &'s mut self,
        value: &'s Value,
        scope: &'s NodeId,
        index: &'s NameIndex,
    ) -> Pin<Box<dyn Future<Output = Result<(), HostError>> + Send + 's>> {
        Box::pin(self.render_value(value, scope, index))
    }

    async fn render_scalar(
        &mut self,
        key: &str,
        value: &Value,
        index: &NameIndex,
    ) -> Result<(), HostError> {
        let Some(target) = index.text_node(self.doc, key) else {
            trace!(key, "no text node matches key");
            self.report
                .record(key, FieldOutcome::SkippedMissingTarget, None);
            return Ok(());
        };
        self.fill_text(&target, &scalar_text(value)).await?;
        self.report.record(key, FieldOutcome::Filled, Some(target));
        Ok(())
    }

    async fn render_array(
        &mut self,
        key: &str,
        items: &[Value],
        index: &NameIndex,
    ) -> Result<(), HostError> {
        let Some(section) = index.node(self.doc, key) else {
            trace!(key, "no section matches key");
            self.report
                .record(key, FieldOutcome::SkippedMissingTarget, None);
            return Ok(());
        };
        if !self
            .doc
            .get(&section)
            .is_some_and(|n| n.kind.supports_children())
        {
            self.report
                .record(key, FieldOutcome::SkippedWrongKind, Some(section));
            return Ok(());
        }

        let Some(list) = find_descendant(self.doc, &section, "list") else {
            self.report
                .record(&format!("{key}.list"), FieldOutcome::SkippedMissingTarget, None);
            return Ok(());
        };
        if !self
            .doc
            .get(&list)
            .is_some_and(|n| n.kind.supports_children())
        {
            self.report
                .record(&format!("{key}.list"), FieldOutcome::SkippedWrongKind, Some(list));
            return Ok(());
        }

        // The template is a direct child frame named "item".
        let children = self.doc.children(&list).to_vec();
        let template = children
            .iter()
            .find(|c| {
                self.doc
                    .get(c)
                    .is_some_and(|n| n.kind == NodeKind::Frame && n.name == "item")
            })
            .cloned();
        let Some(template) = template else {
            self.report
                .record(&format!("{key}.item"), FieldOutcome::SkippedMissingTarget, None);
            return Ok(());
        };

        // Clear any previous render's leftovers, preserving the template.
        for child in &children {
            if *child != template {
                self.doc.remove_subtree(child);
            }
        }

        if items.is_empty() {
            self.doc.remove_subtree(&template);
            self.report.record(key, FieldOutcome::Filled, Some(list));
            return Ok(());
        }

        for item in items {
            let Some(clone) = self.doc.clone_subtree(&template) else {
                continue;
            };
            self.doc.append_child(&list, &clone);
            let clone_index = NameIndex::build(self.doc, &clone);
            if key == "dependencies" {
                self.render_dependency(item, &clone_index).await?;
            } else {
                self.render_value_boxed(item, &clone, &clone_index).await?;
                if let Some(node_id) = item
                    .get("nodeId")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                {
                    self.render_example(node_id, &clone_index).await?;
                }
            }
        }

        self.doc.remove_subtree(&template);
        self.report.record(key, FieldOutcome::Filled, Some(list));
        Ok(())
    }

    async fn render_applied_to(
        &mut self,
        applied_to: &Map<String, Value>,
        index: &NameIndex,
    ) -> Result<(), HostError> {
        let Some(target) = index.text_node(self.doc, "appliedTo") else {
            self.report
                .record("appliedTo", FieldOutcome::SkippedMissingTarget, None);
            return Ok(());
        };

        let layer_name = applied_to
            .get("layerName")
            .and_then(Value::as_str)
            .unwrap_or("");
        if layer_name.is_empty() {
            self.fill_text(&target, NOT_AVAILABLE).await?;
            self.doc.set_hyperlink(&target, None);
            self.report
                .record("appliedTo", FieldOutcome::Filled, Some(target));
            return Ok(());
        }

        self.fill_text(&target, layer_name).await?;
        let node_id = applied_to
            .get("nodeId")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty());
        match node_id {
            Some(id) => {
                let url = deep_link(self.doc.file_key().unwrap_or(""), id);
                self.doc.set_hyperlink(&target, Some(Hyperlink::new(url)));
            }
            None => self.doc.set_hyperlink(&target, None),
        }
        self.report
            .record("appliedTo", FieldOutcome::Filled, Some(target));
        Ok(())
    }

    /// Dependency items fill only their `name` node, hyperlinked to
    /// the dependency's `link` when present.
    async fn render_dependency(
        &mut self,
        item: &Value,
        index: &NameIndex,
    ) -> Result<(), HostError> {
        let Some(target) = index.text_node(self.doc, "name") else {
            self.report
                .record("dependencies.name", FieldOutcome::SkippedMissingTarget, None);
            return Ok(());
        };

        let name = item.get("name").and_then(Value::as_str).unwrap_or("");
        if name.is_empty() {
            self.fill_text(&target, NOT_AVAILABLE).await?;
            self.doc.set_hyperlink(&target, None);
            self.report
                .record("dependencies.name", FieldOutcome::Filled, Some(target));
            return Ok(());
        }

        self.fill_text(&target, name).await?;
        let link = item
            .get("link")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty());
        match link {
            Some(url) => self.doc.set_hyperlink(&target, Some(Hyperlink::new(url))),
            None => self.doc.set_hyperlink(&target, None),
        }
        self.report
            .record("dependencies.name", FieldOutcome::Filled, Some(target));
        Ok(())
    }

    /// Instantiates the referenced component into `exampleDisplay`.
    async fn render_example(&mut self, node_id: &str, index: &NameIndex) -> Result<(), HostError> {
        let Some(display) = index.node(self.doc, "exampleDisplay") else {
            self.report
                .record("exampleDisplay", FieldOutcome::SkippedMissingTarget, None);
            return Ok(());
        };
        if !self
            .doc
            .get(&display)
            .is_some_and(|n| n.kind == NodeKind::Frame)
        {
            self.report
                .record("exampleDisplay", FieldOutcome::SkippedWrongKind, Some(display));
            return Ok(());
        }

        for child in self.doc.children(&display).to_vec() {
            self.doc.remove_subtree(&child);
        }

        let source = NodeId::new(node_id);
        let Some(kind) = self.doc.get_node_by_id(&source).await.map(|n| n.kind) else {
            trace!(%source, "referenced node not found");
            self.report
                .record("exampleDisplay", FieldOutcome::SkippedMissingTarget, None);
            return Ok(());
        };
        if kind != NodeKind::Component {
            self.report
                .record("exampleDisplay", FieldOutcome::SkippedWrongKind, Some(source));
            return Ok(());
        }

        if let Some(instance) = self.doc.create_instance(&source) {
            self.doc.append_child(&display, &instance);
            self.report
                .record("exampleDisplay", FieldOutcome::Filled, Some(instance));
        }
        Ok(())
    }

    /// Loads the node's font, then sets its characters.
    ///
    /// The font load is awaited before every text mutation; there is
    /// no batching.
    async fn fill_text(&mut self, target: &NodeId, text: &str) -> Result<(), HostError> {
        let font = self.doc.font(target);
        self.host.load_font(&font).await?;
        self.doc.set_characters(target, text);
        Ok(())
    }
}

/// Text rendered for a scalar value.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => NOT_AVAILABLE.to_string(),
        Value::String(s) if s.is_empty() => NOT_AVAILABLE.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
