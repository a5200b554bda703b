//! Arena-based scene document.
//!
//! Nodes live in an insertion-ordered map keyed by [`NodeId`]; tree
//! structure is expressed through child-id lists and parent back
//! references. The renderer treats the document as exclusively owned
//! for the duration of one render call.

use indexmap::IndexMap;

use crate::error::SceneError;
use crate::scene::node::{FontName, Hyperlink, NodeId, NodeKind, SceneNode};

/// The host document model.
#[derive(Debug, Clone)]
pub struct SceneDocument {
    nodes: IndexMap<NodeId, SceneNode>,
    root: NodeId,
    selection: Vec<NodeId>,
    file_key: Option<String>,
    next_minted: u64,
}

impl SceneDocument {
    /// Creates a document with a single page root named `root_name`.
    #[must_use]
    pub fn new(root_name: &str) -> Self {
        let root_id = NodeId::new("0:0");
        let mut nodes = IndexMap::new();
        nodes.insert(
            root_id.clone(),
            SceneNode::new(root_id.clone(), NodeKind::Page, root_name),
        );
        Self {
            nodes,
            root: root_id,
            selection: Vec::new(),
            file_key: None,
            next_minted: 0,
        }
    }

    /// Returns the root id.
    #[must_use]
    pub fn root(&self) -> &NodeId {
        &self.root
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selection(&self) -> &[NodeId] {
        &self.selection
    }

    /// Replaces the current selection.
    pub fn set_selection(&mut self, selection: Vec<NodeId>) {
        self.selection = selection;
    }

    /// Returns the document's file key, if it has one.
    #[must_use]
    pub fn file_key(&self) -> Option<&str> {
        self.file_key.as_deref()
    }

    /// Sets the document's file key.
    pub fn set_file_key(&mut self, file_key: Option<String>) {
        self.file_key = file_key;
    }

    /// Returns the node with the given id.
    #[must_use]
    pub fn get(&self, id: &NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    /// Returns `true` if the node exists in the arena.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Returns the number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the child ids of a node, in paint order.
    ///
    /// Missing nodes yield an empty slice.
    #[must_use]
    pub fn children(&self, id: &NodeId) -> &[NodeId] {
        self.nodes.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Resolves a node by id from the live document.
    ///
    /// Asynchronous because the host API resolves ids against
    /// dynamically loaded pages; the in-memory arena answers
    /// immediately but callers must still await before instance
    /// creation.
    pub async fn get_node_by_id(&self, id: &NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    /// Inserts a detached node under `parent`, keeping the node's
    /// declared id.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateId`] if a node with the same id
    /// already exists.
    pub fn insert(&mut self, parent: &NodeId, mut node: SceneNode) -> Result<NodeId, SceneError> {
        if self.nodes.contains_key(&node.id) {
            return Err(SceneError::DuplicateId {
                id: node.id.to_string(),
            });
        }
        let id = node.id.clone();
        node.parent = Some(parent.clone());
        self.nodes.insert(id.clone(), node);
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(id.clone());
        }
        Ok(id)
    }

    /// Creates a node of the given kind and name under `parent`,
    /// minting a fresh id.
    pub fn create_node(&mut self, parent: &NodeId, kind: NodeKind, name: &str) -> NodeId {
        let id = self.mint_id();
        let node = SceneNode::new(id.clone(), kind, name);
        // mint_id guarantees uniqueness
        let _ = self.insert(parent, node);
        id
    }

    /// Creates a text node appended to the root, as the host does for
    /// ad-hoc node creation.
    pub fn create_text(&mut self) -> NodeId {
        let root = self.root.clone();
        self.create_node(&root, NodeKind::Text, "Text")
    }

    /// Sets the characters of a text node.
    ///
    /// Non-text nodes and missing ids are silently ignored.
    pub fn set_characters(&mut self, id: &NodeId, characters: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            if node.kind == NodeKind::Text {
                node.characters = characters.to_string();
            }
        }
    }

    /// Sets or clears the hyperlink over a text node's full range.
    ///
    /// Non-text nodes and missing ids are silently ignored.
    pub fn set_hyperlink(&mut self, id: &NodeId, hyperlink: Option<Hyperlink>) {
        if let Some(node) = self.nodes.get_mut(id) {
            if node.kind == NodeKind::Text {
                node.hyperlink = hyperlink;
            }
        }
    }

    /// Returns the font of a node, or the document default for
    /// missing ids.
    #[must_use]
    pub fn font(&self, id: &NodeId) -> FontName {
        self.nodes.get(id).map_or_else(FontName::default, |n| n.font.clone())
    }

    /// Moves `child` to be the last child of `parent`.
    ///
    /// Detaches the child from its current parent first. Missing
    /// nodes are silently ignored.
    pub fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return;
        }
        self.detach(child);
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(child.clone());
        }
        if let Some(child_node) = self.nodes.get_mut(child) {
            child_node.parent = Some(parent.clone());
        }
    }

    /// Removes a node and all of its descendants from the document.
    ///
    /// The subtree is detached from its parent, purged from the
    /// arena, and dropped from the selection. Missing ids are
    /// silently ignored.
    pub fn remove_subtree(&mut self, id: &NodeId) {
        if !self.nodes.contains_key(id) {
            return;
        }
        self.detach(id);
        let mut stack = vec![id.clone()];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.shift_remove(&current) {
                stack.extend(node.children);
            }
        }
        self.selection.retain(|s| self.nodes.contains_key(s));
    }

    /// Deep-copies a subtree, minting fresh ids throughout.
    ///
    /// The clone is detached; callers append it where it belongs.
    /// Returns `None` if the source id is missing.
    pub fn clone_subtree(&mut self, id: &NodeId) -> Option<NodeId> {
        self.clone_rec(id, None)
    }

    /// Instantiates a component definition.
    ///
    /// The instance is a detached deep copy whose root records the
    /// source component. Returns `None` if the source is missing or
    /// not a component.
    pub fn create_instance(&mut self, component: &NodeId) -> Option<NodeId> {
        if self.nodes.get(component)?.kind != NodeKind::Component {
            return None;
        }
        let instance = self.clone_rec(component, None)?;
        if let Some(node) = self.nodes.get_mut(&instance) {
            node.kind = NodeKind::Instance;
            node.main_component = Some(component.clone());
        }
        Some(instance)
    }

    fn clone_rec(&mut self, id: &NodeId, parent: Option<NodeId>) -> Option<NodeId> {
        let mut node = self.nodes.get(id)?.clone();
        let new_id = self.mint_id();
        node.id = new_id.clone();
        node.parent = parent;
        let source_children = std::mem::take(&mut node.children);
        self.nodes.insert(new_id.clone(), node);
        let mut children = Vec::with_capacity(source_children.len());
        for child in &source_children {
            if let Some(cloned) = self.clone_rec(child, Some(new_id.clone())) {
                children.push(cloned);
            }
        }
        if let Some(node) = self.nodes.get_mut(&new_id) {
            node.children = children;
        }
        Some(new_id)
    }

    fn detach(&mut self, id: &NodeId) {
        let parent = self.nodes.get(id).and_then(|n| n.parent.clone());
        if let Some(parent_id) = parent {
            if let Some(parent_node) = self.nodes.get_mut(&parent_id) {
                parent_node.children.retain(|c| c != id);
            }
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = None;
        }
    }

    /// Mints an id unused in this document, in the host's
    /// `"0:<n>"` form.
    pub fn mint_id(&mut self) -> NodeId {
        loop {
            self.next_minted += 1;
            let id = NodeId::new(format!("0:{}", self.next_minted));
            if !self.nodes.contains_key(&id) {
                return id;
            }
        }
    }
}
