//! `docuframe` - component documentation renderer for design-tool
//! template scenes.
//!
//! This library fills a pre-authored scene-graph template with the
//! contents of a structured documentation record: text nodes by name
//! match, list sections by clone-from-template, hyperlinked fields,
//! and live component-instance previews.

pub mod cli;
pub mod doc;
pub mod error;
pub mod host;
pub mod message;
pub mod observability;
pub mod plugin;
pub mod render;
pub mod scene;
