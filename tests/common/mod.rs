//! Shared fixtures: a pre-authored template scene matching the
//! documentation-record shape, and record builders.

#![allow(dead_code)]

use docuframe::render::{find_descendant, find_text_descendant};
use docuframe::scene::{NodeId, NodeKind, SceneDocument, SceneNode};

/// Id of the live component definition available for instance
/// previews.
pub const COMPONENT_ID: &str = "1:23";

/// File key of the template document.
pub const FILE_KEY: &str = "testkey";

/// Builds the standard template: a selected `componentDocs` frame
/// with header text nodes, all five list sections, and a live
/// component definition outside the frame.
pub fn template() -> (SceneDocument, NodeId) {
    let mut doc = SceneDocument::new("Page 1");
    doc.set_file_key(Some(FILE_KEY.to_string()));
    let root = doc.root().clone();

    let frame = doc.create_node(&root, NodeKind::Frame, "componentDocs");
    let header = doc.create_node(&frame, NodeKind::Frame, "header");
    for name in [
        "componentName",
        "libraryName",
        "componentLayerName",
        "description",
    ] {
        doc.create_node(&header, NodeKind::Text, name);
    }

    section(&mut doc, &frame, "properties", &["name", "type", "values", "appliedTo"], false);
    section(&mut doc, &frame, "variants", &["name", "usage"], true);
    section(&mut doc, &frame, "dos", &["title", "description"], false);
    section(&mut doc, &frame, "donts", &["title", "description"], false);
    section(&mut doc, &frame, "dependencies", &["name"], false);

    doc.insert(
        &root,
        SceneNode::new(NodeId::new(COMPONENT_ID), NodeKind::Component, "Primary"),
    )
    .expect("component id is free");

    doc.set_selection(vec![frame.clone()]);
    (doc, frame)
}

fn section(
    doc: &mut SceneDocument,
    parent: &NodeId,
    name: &str,
    fields: &[&str],
    with_example: bool,
) {
    let section = doc.create_node(parent, NodeKind::Frame, name);
    let list = doc.create_node(&section, NodeKind::Frame, "list");
    let item = doc.create_node(&list, NodeKind::Frame, "item");
    for field in fields {
        doc.create_node(&item, NodeKind::Text, field);
    }
    if with_example {
        doc.create_node(&item, NodeKind::Frame, "exampleDisplay");
    }
}

/// The reference record: empty library name, one variant with a live
/// preview, one hyperlinked dependency.
pub fn scenario_record() -> &'static str {
    r#"{
        "header": {
            "componentName": "Button",
            "libraryName": "",
            "componentLayerName": "Button",
            "description": "Primary action"
        },
        "properties": [],
        "variants": [{"name": "Primary", "usage": "Main CTA", "nodeId": "1:23"}],
        "dos": [],
        "donts": [],
        "dependencies": [{"name": "Icon", "link": "https://figma.com/x"}]
    }"#
}

/// Characters of the first text node named `name` under `scope`.
pub fn text_of(doc: &SceneDocument, scope: &NodeId, name: &str) -> String {
    let id = find_text_descendant(doc, scope, name)
        .unwrap_or_else(|| panic!("no text node named {name}"));
    doc.get(&id).expect("node").characters.clone()
}

/// Hyperlink URL of the first text node named `name` under `scope`.
pub fn hyperlink_of(doc: &SceneDocument, scope: &NodeId, name: &str) -> Option<String> {
    let id = find_text_descendant(doc, scope, name)?;
    doc.get(&id)?.hyperlink.as_ref().map(|h| h.url.clone())
}

/// Direct children of a section's `list` container.
pub fn list_children(doc: &SceneDocument, scope: &NodeId, section: &str) -> Vec<NodeId> {
    let section_id =
        find_descendant(doc, scope, section).unwrap_or_else(|| panic!("no section {section}"));
    let list = find_descendant(doc, &section_id, "list").expect("list");
    doc.children(&list).to_vec()
}
