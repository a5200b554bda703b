//! Name-based lookups over the scope tree.
//!
//! Two pure recursive searches: first node of any kind with a given
//! name, and first text node with a given name, depth-first in child
//! order, short-circuiting on the first match. Ties go to source
//! order; absence is an empty result, never an error.
//!
//! [`NameIndex`] is the hot path: one traversal per entered scope
//! builds first-wins maps for both searches. Array rendering removes
//! and appends list children mid-pass, so an index answer is
//! re-checked against the arena and falls back to a fresh recursive
//! search when stale or missing.

use indexmap::IndexMap;

use crate::scene::{NodeId, NodeKind, SceneDocument};

/// First node (including `scope` itself) named `name`, depth-first.
#[must_use]
pub fn find_descendant(doc: &SceneDocument, scope: &NodeId, name: &str) -> Option<NodeId> {
    let node = doc.get(scope)?;
    if node.name == name {
        return Some(scope.clone());
    }
    for child in doc.children(scope) {
        if let Some(found) = find_descendant(doc, child, name) {
            return Some(found);
        }
    }
    None
}

/// First text node (including `scope` itself) named `name`,
/// depth-first.
///
/// Non-text nodes with the same name do not block the search.
#[must_use]
pub fn find_text_descendant(doc: &SceneDocument, scope: &NodeId, name: &str) -> Option<NodeId> {
    let node = doc.get(scope)?;
    if node.kind == NodeKind::Text && node.name == name {
        return Some(scope.clone());
    }
    for child in doc.children(scope) {
        if let Some(found) = find_text_descendant(doc, child, name) {
            return Some(found);
        }
    }
    None
}

/// Name → node maps for one scope, built in a single traversal.
#[derive(Debug)]
pub struct NameIndex {
    scope: NodeId,
    any: IndexMap<String, NodeId>,
    text: IndexMap<String, NodeId>,
}

impl NameIndex {
    /// Indexes the subtree rooted at `scope`.
    #[must_use]
    pub fn build(doc: &SceneDocument, scope: &NodeId) -> Self {
        let mut index = Self {
            scope: scope.clone(),
            any: IndexMap::new(),
            text: IndexMap::new(),
        };
        index.visit(doc, scope);
        index
    }

    fn visit(&mut self, doc: &SceneDocument, id: &NodeId) {
        let Some(node) = doc.get(id) else { return };
        self.any
            .entry(node.name.clone())
            .or_insert_with(|| id.clone());
        if node.kind == NodeKind::Text {
            self.text
                .entry(node.name.clone())
                .or_insert_with(|| id.clone());
        }
        for child in doc.children(id) {
            self.visit(doc, child);
        }
    }

    /// First node named `name` in scope, of any kind.
    #[must_use]
    pub fn node(&self, doc: &SceneDocument, name: &str) -> Option<NodeId> {
        match self.any.get(name) {
            Some(id) if doc.contains(id) => Some(id.clone()),
            _ => find_descendant(doc, &self.scope, name),
        }
    }

    /// First text node named `name` in scope.
    #[must_use]
    pub fn text_node(&self, doc: &SceneDocument, name: &str) -> Option<NodeId> {
        match self.text.get(name) {
            Some(id) if doc.contains(id) => Some(id.clone()),
            _ => find_text_descendant(doc, &self.scope, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_duplicates() -> (SceneDocument, NodeId) {
        let mut doc = SceneDocument::new("Page 1");
        let root = doc.root().clone();
        let scope = doc.create_node(&root, NodeKind::Frame, "scope");
        let group = doc.create_node(&scope, NodeKind::Group, "label");
        doc.create_node(&group, NodeKind::Text, "label");
        doc.create_node(&scope, NodeKind::Text, "label");
        (doc, scope)
    }

    #[test]
    fn find_descendant_prefers_source_order() {
        let (doc, scope) = doc_with_duplicates();
        let found = find_descendant(&doc, &scope, "label").expect("found");
        // the group comes first in child order
        assert_eq!(doc.get(&found).expect("node").kind, NodeKind::Group);
    }

    #[test]
    fn find_text_descendant_skips_non_text() {
        let (doc, scope) = doc_with_duplicates();
        let found = find_text_descendant(&doc, &scope, "label").expect("found");
        let node = doc.get(&found).expect("node");
        assert_eq!(node.kind, NodeKind::Text);
        // the nested text inside the group is reached before the sibling
        assert_eq!(doc.get(&node.parent.clone().expect("parent")).expect("parent").kind, NodeKind::Group);
    }

    #[test]
    fn find_includes_scope_itself() {
        let (doc, scope) = doc_with_duplicates();
        assert_eq!(find_descendant(&doc, &scope, "scope"), Some(scope));
    }

    #[test]
    fn absent_name_is_none() {
        let (doc, scope) = doc_with_duplicates();
        assert_eq!(find_descendant(&doc, &scope, "missing"), None);
        assert_eq!(find_text_descendant(&doc, &scope, "missing"), None);
    }

    #[test]
    fn index_agrees_with_recursive_search() {
        let (doc, scope) = doc_with_duplicates();
        let index = NameIndex::build(&doc, &scope);
        assert_eq!(
            index.node(&doc, "label"),
            find_descendant(&doc, &scope, "label")
        );
        assert_eq!(
            index.text_node(&doc, "label"),
            find_text_descendant(&doc, &scope, "label")
        );
        assert_eq!(index.node(&doc, "missing"), None);
    }

    #[test]
    fn stale_index_hit_falls_back_to_search() {
        let (mut doc, scope) = doc_with_duplicates();
        let index = NameIndex::build(&doc, &scope);
        let first = index.node(&doc, "label").expect("hit");
        doc.remove_subtree(&first);
        let fallback = index.node(&doc, "label").expect("fallback");
        assert_ne!(fallback, first);
        assert!(doc.contains(&fallback));
    }

    #[test]
    fn index_miss_sees_nodes_added_after_build() {
        let (mut doc, scope) = doc_with_duplicates();
        let index = NameIndex::build(&doc, &scope);
        doc.create_node(&scope, NodeKind::Text, "late");
        assert!(index.text_node(&doc, "late").is_some());
    }
}
