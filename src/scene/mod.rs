//! Scene-graph model standing in for the host document.
//!
//! The renderer mutates a [`SceneDocument`], an id-keyed arena of
//! [`SceneNode`]s owned by the caller. A nested serde form,
//! [`SceneFile`], converts to and from the arena for offline template
//! loading.

pub mod document;
pub mod file;
pub mod node;

pub use document::SceneDocument;
pub use file::{NodeDef, SceneFile};
pub use node::{FontName, Hyperlink, NodeId, NodeKind, SceneNode};
