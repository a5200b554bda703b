//! Semantic validation for documentation records.
//!
//! Validation collects ALL issues (doesn't stop at the first) so a
//! record author sees everything at once. Shape problems are caught
//! earlier by the typed parse; everything here is advisory except
//! unnamed properties, which can never match a template node.

use std::sync::LazyLock;

use regex::Regex;

use crate::doc::DocumentationRecord;
use crate::error::{Severity, ValidationIssue};

/// Host node ids look like `"1:23"`.
static NODE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+:\d+$").expect("valid regex"));

/// Result of record validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Issues that reject the record.
    pub errors: Vec<ValidationIssue>,

    /// Advisory issues.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Documentation-record validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a record and returns all collected issues.
    pub fn validate(&mut self, record: &DocumentationRecord) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_header(record);
        self.validate_properties(record);
        self.validate_variants(record);
        self.validate_dependencies(record);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    fn validate_header(&mut self, record: &DocumentationRecord) {
        if record.header.component_name.is_empty() {
            self.warn("header.componentName", "component name is empty");
        }
    }

    fn validate_properties(&mut self, record: &DocumentationRecord) {
        for (i, property) in record.properties.iter().enumerate() {
            if property.name.is_empty() {
                self.error(&format!("properties[{i}].name"), "property name is empty");
            }
            if let Some(applied_to) = &property.applied_to {
                if let Some(node_id) = &applied_to.node_id {
                    self.check_node_id(&format!("properties[{i}].appliedTo.nodeId"), node_id);
                }
            }
        }
    }

    fn validate_variants(&mut self, record: &DocumentationRecord) {
        for (i, variant) in record.variants.iter().enumerate() {
            if let Some(node_id) = &variant.node_id {
                self.check_node_id(&format!("variants[{i}].nodeId"), node_id);
            }
        }
    }

    fn validate_dependencies(&mut self, record: &DocumentationRecord) {
        for (i, dependency) in record.dependencies.iter().enumerate() {
            if dependency.name.is_empty() {
                self.warn(
                    &format!("dependencies[{i}].name"),
                    "dependency name is empty, renders as N/A",
                );
            }
            if let Some(link) = &dependency.link {
                if !link.starts_with("http://") && !link.starts_with("https://") {
                    self.warn(
                        &format!("dependencies[{i}].link"),
                        "link is not an http(s) URL",
                    );
                }
            }
        }
    }

    fn check_node_id(&mut self, path: &str, node_id: &str) {
        if !node_id.is_empty() && !NODE_ID_RE.is_match(node_id) {
            self.warn(path, "node id does not match the <num>:<num> form");
        }
    }

    fn error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    fn warn(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}
