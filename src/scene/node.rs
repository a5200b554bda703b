//! Scene node types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a node in the host document, in the host's
/// `"<num>:<num>"` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a node id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Node kinds the renderer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Auto-layout container; the only kind accepted as a render root
    /// or list item template.
    Frame,
    /// Plain grouping container.
    Group,
    /// Text-bearing leaf node.
    Text,
    /// Reusable component definition.
    Component,
    /// Instantiated copy of a component.
    Instance,
    /// Top-level page container.
    Page,
}

impl NodeKind {
    /// Whether nodes of this kind can contain children.
    #[must_use]
    pub const fn supports_children(self) -> bool {
        matches!(
            self,
            Self::Frame | Self::Group | Self::Component | Self::Instance | Self::Page
        )
    }
}

/// A font reference as the host names it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontName {
    /// Font family (e.g. "Inter")
    pub family: String,
    /// Font style (e.g. "Regular")
    pub style: String,
}

impl Default for FontName {
    fn default() -> Self {
        Self {
            family: "Inter".to_string(),
            style: "Regular".to_string(),
        }
    }
}

/// A hyperlink covering the full character range of a text node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hyperlink {
    /// Target URL
    pub url: String,
}

impl Hyperlink {
    /// Creates a hyperlink to the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// A node in the scene arena.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Unique id within the document
    pub id: NodeId,
    /// Layer name; all renderer matching is by exact name
    pub name: String,
    /// Node kind
    pub kind: NodeKind,
    /// Displayed characters (text nodes only)
    pub characters: String,
    /// Font of the node's characters
    pub font: FontName,
    /// Hyperlink over the full character range, if any
    pub hyperlink: Option<Hyperlink>,
    /// Child ids in paint order
    pub children: Vec<NodeId>,
    /// Parent id; `None` for the root and detached subtrees
    pub parent: Option<NodeId>,
    /// Source component id (instances only)
    pub main_component: Option<NodeId>,
}

impl SceneNode {
    /// Creates a node with the given id, kind, and name.
    ///
    /// Characters start empty, the font is the document default, and
    /// the node is detached.
    #[must_use]
    pub fn new(id: NodeId, kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            characters: String::new(),
            font: FontName::default(),
            hyperlink: None,
            children: Vec::new(),
            parent: None,
            main_component: None,
        }
    }

    /// Sets the node's characters, builder style.
    #[must_use]
    pub fn with_characters(mut self, characters: impl Into<String>) -> Self {
        self.characters = characters.into();
        self
    }
}
