//! Typed documentation-record model.
//!
//! This is the input contract the renderer consumes. The renderer
//! itself walks arbitrary JSON; the typed model backs validation and
//! fixture construction.

pub mod validation;

pub use validation::{ValidationResult, Validator};

use serde::{Deserialize, Serialize};

/// A complete documentation record for one component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentationRecord {
    /// Header block: names and description
    pub header: Header,
    /// Component properties
    pub properties: Vec<Property>,
    /// Component variants
    pub variants: Vec<Variant>,
    /// Recommended usages
    pub dos: Vec<Practice>,
    /// Discouraged usages
    pub donts: Vec<Practice>,
    /// Nested components this component uses
    pub dependencies: Vec<Dependency>,
}

impl DocumentationRecord {
    /// Parses a record from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error when the text is not valid
    /// JSON or does not match the record shape.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Converts the record into the generic JSON value the renderer
    /// walks.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Header block of a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Header {
    /// Human-readable component name
    pub component_name: String,
    /// Library or file the component lives in
    pub library_name: String,
    /// Exact root layer name
    pub component_layer_name: String,
    /// Short prose description
    pub description: String,
}

/// One component property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Property {
    /// Property name
    pub name: String,
    /// Property kind
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    /// Available values, comma-separated
    pub values: String,
    /// Layer binding, if determinable
    pub applied_to: Option<AppliedTo>,
}

/// The closed set of property kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// On/off toggle
    Boolean,
    /// One of an enumerated set
    Variant,
    /// Swappable child slot
    Slot,
    /// Free text
    #[default]
    Text,
}

/// Which design layer a property binds to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppliedTo {
    /// Bound layer name; empty renders as "N/A"
    pub layer_name: String,
    /// Deep-link target node id
    pub node_id: Option<String>,
}

/// One component variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Variant {
    /// Variant name
    pub name: String,
    /// When to use this variant
    pub usage: String,
    /// Live example node id for the instance preview
    pub node_id: Option<String>,
}

/// One do/don't entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Practice {
    /// Short rule
    pub title: String,
    /// Supporting explanation
    pub description: String,
}

/// One nested-component dependency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dependency {
    /// Dependency component name; empty renders as "N/A"
    pub name: String,
    /// Link to the dependency component
    pub link: Option<String>,
}
