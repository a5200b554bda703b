//! Nested serde form of a scene document.
//!
//! Pre-authored templates are shipped as JSON trees; the loader
//! flattens them into the arena, minting ids for nodes that do not
//! declare one.

use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::scene::document::SceneDocument;
use crate::scene::node::{FontName, Hyperlink, NodeId, NodeKind, SceneNode};

/// A scene document as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneFile {
    /// File key used for deep links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_key: Option<String>,

    /// Ids of the currently selected nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selection: Vec<NodeId>,

    /// The document tree
    pub root: NodeDef,
}

/// One node of the nested tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDef {
    /// Node id; minted at load when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,

    /// Layer name
    pub name: String,

    /// Node kind
    pub kind: NodeKind,

    /// Displayed characters (text nodes)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub characters: String,

    /// Font; document default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontName>,

    /// Hyperlink over the full character range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<Hyperlink>,

    /// Child nodes in paint order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDef>,
}

impl NodeDef {
    /// Creates a childless node definition.
    #[must_use]
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind,
            characters: String::new(),
            font: None,
            hyperlink: None,
            children: Vec::new(),
        }
    }

    /// Adds children, builder style.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Sets the node id, builder style.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(NodeId::new(id));
        self
    }
}

impl SceneFile {
    /// Flattens the nested tree into an arena document.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateId`] when two nodes declare the
    /// same id, and [`SceneError::UnknownId`] when the selection
    /// references a node absent from the tree.
    pub fn into_document(self) -> Result<SceneDocument, SceneError> {
        let mut doc = SceneDocument::new(&self.root.name);
        doc.set_file_key(self.file_key);

        // The constructor's page root stands in for the tree root;
        // apply the root def's remaining fields onto it, then insert
        // children beneath.
        let root_id = doc.root().clone();
        for child in self.root.children {
            insert_def(&mut doc, &root_id, child)?;
        }

        for id in &self.selection {
            if !doc.contains(id) {
                return Err(SceneError::UnknownId { id: id.to_string() });
            }
        }
        doc.set_selection(self.selection);
        Ok(doc)
    }

    /// Rebuilds the nested form from an arena document.
    #[must_use]
    pub fn from_document(doc: &SceneDocument) -> Self {
        Self {
            file_key: doc.file_key().map(str::to_string),
            selection: doc.selection().to_vec(),
            root: def_from_node(doc, doc.root()),
        }
    }
}

fn insert_def(
    doc: &mut SceneDocument,
    parent: &NodeId,
    def: NodeDef,
) -> Result<NodeId, SceneError> {
    let id = match def.id {
        Some(id) => id,
        None => doc.mint_id(),
    };
    let mut node = SceneNode::new(id, def.kind, def.name);
    node.characters = def.characters;
    node.font = def.font.unwrap_or_default();
    node.hyperlink = def.hyperlink;
    let id = doc.insert(parent, node)?;
    for child in def.children {
        insert_def(doc, &id, child)?;
    }
    Ok(id)
}

fn def_from_node(doc: &SceneDocument, id: &NodeId) -> NodeDef {
    let Some(node) = doc.get(id) else {
        return NodeDef::new(NodeKind::Frame, "");
    };
    NodeDef {
        id: Some(node.id.clone()),
        name: node.name.clone(),
        kind: node.kind,
        characters: node.characters.clone(),
        font: (node.font != FontName::default()).then(|| node.font.clone()),
        hyperlink: node.hyperlink.clone(),
        children: node
            .children
            .iter()
            .map(|child| def_from_node(doc, child))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file() -> SceneFile {
        SceneFile {
            file_key: Some("abc123".to_string()),
            selection: vec![NodeId::new("1:1")],
            root: NodeDef::new(NodeKind::Page, "Page 1").with_children(vec![
                NodeDef::new(NodeKind::Frame, "componentDocs")
                    .with_id("1:1")
                    .with_children(vec![
                        NodeDef::new(NodeKind::Text, "componentName")
                            .with_id("1:2"),
                    ]),
            ]),
        }
    }

    #[test]
    fn load_builds_arena() {
        let doc = sample_file().into_document().expect("load");
        assert_eq!(doc.file_key(), Some("abc123"));
        assert_eq!(doc.selection(), [NodeId::new("1:1")]);
        let frame = doc.get(&NodeId::new("1:1")).expect("frame");
        assert_eq!(frame.name, "componentDocs");
        assert_eq!(doc.children(&NodeId::new("1:1")), [NodeId::new("1:2")]);
    }

    #[test]
    fn missing_ids_are_minted() {
        let file = SceneFile {
            file_key: None,
            selection: Vec::new(),
            root: NodeDef::new(NodeKind::Page, "Page 1")
                .with_children(vec![NodeDef::new(NodeKind::Frame, "anonymous")]),
        };
        let doc = file.into_document().expect("load");
        assert_eq!(doc.children(doc.root()).len(), 1);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let file = SceneFile {
            file_key: None,
            selection: Vec::new(),
            root: NodeDef::new(NodeKind::Page, "Page 1").with_children(vec![
                NodeDef::new(NodeKind::Frame, "a").with_id("1:1"),
                NodeDef::new(NodeKind::Frame, "b").with_id("1:1"),
            ]),
        };
        assert!(matches!(
            file.into_document(),
            Err(SceneError::DuplicateId { .. })
        ));
    }

    #[test]
    fn dangling_selection_is_rejected() {
        let file = SceneFile {
            file_key: None,
            selection: vec![NodeId::new("9:9")],
            root: NodeDef::new(NodeKind::Page, "Page 1"),
        };
        assert!(matches!(
            file.into_document(),
            Err(SceneError::UnknownId { .. })
        ));
    }

    #[test]
    fn roundtrip_preserves_structure() {
        let file = sample_file();
        let doc = file.into_document().expect("load");
        let rebuilt = SceneFile::from_document(&doc);
        assert_eq!(rebuilt.file_key, Some("abc123".to_string()));
        assert_eq!(rebuilt.selection, vec![NodeId::new("1:1")]);
        assert_eq!(rebuilt.root.children.len(), 1);
        let frame = &rebuilt.root.children[0];
        assert_eq!(frame.name, "componentDocs");
        assert_eq!(frame.children[0].name, "componentName");
    }

    #[test]
    fn json_shape_is_camel_case() {
        let json = serde_json::to_value(sample_file()).expect("serialize");
        assert!(json.get("fileKey").is_some());
        assert_eq!(json["root"]["kind"], "page");
    }
}
