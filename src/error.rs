//! Error types for `docuframe`.
//!
//! Two error kinds are user-facing and abort a render before any
//! mutation: an invalid selection and unparseable input JSON. Every
//! other anomaly during rendering is a template-shape mismatch and is
//! handled by silent no-op at the point of failure, never through this
//! hierarchy.

use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `docuframe` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Input error (invalid selection, invalid JSON, failed validation)
    pub const INPUT_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Host bridge error (rejected font load)
    pub const HOST_ERROR: i32 = 4;

    /// Scene file error (duplicate or dangling node ids)
    pub const SCENE_ERROR: i32 = 5;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `docuframe` operations.
///
/// Aggregates all domain-specific errors and provides a unified
/// interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum DocuframeError {
    /// Render input was rejected before any mutation
    #[error(transparent)]
    Input(#[from] InputError),

    /// A host call was rejected mid-render
    #[error(transparent)]
    Host(#[from] HostError),

    /// Scene file loading error
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocuframeError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Input(_) | Self::Json(_) => ExitCode::INPUT_ERROR,
            Self::Host(_) => ExitCode::HOST_ERROR,
            Self::Scene(_) => ExitCode::SCENE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Input Errors
// ============================================================================

/// Render-input rejection.
///
/// Both variants surface as a host notification and abort the render
/// before any document mutation.
#[derive(Debug, Error)]
pub enum InputError {
    /// Selection is not exactly one frame node.
    #[error("select exactly one root frame")]
    InvalidSelection,

    /// The provided text failed to parse as JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// A documentation record failed semantic validation.
    #[error("validation failed for {path}: {count} error(s)")]
    InvalidRecord {
        /// Path to the record file
        path: String,
        /// Number of error-severity issues found
        count: usize,
    },
}

// ============================================================================
// Host Errors
// ============================================================================

/// A rejected host call.
///
/// Host calls are awaited once and not retried; a rejection aborts the
/// remaining render and propagates here.
#[derive(Debug, Error)]
pub enum HostError {
    /// Font loading was rejected by the host.
    #[error("font load failed for {family} {style}: {message}")]
    FontLoad {
        /// Font family name
        family: String,
        /// Font style name
        style: String,
        /// Error message from the host
        message: String,
    },

    /// Any other host-side failure.
    #[error("host call failed: {0}")]
    Unavailable(String),
}

// ============================================================================
// Scene Errors
// ============================================================================

/// Scene file loading errors.
///
/// Only the offline file loader produces these; the renderer itself
/// never raises for scene-shape problems.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Two nodes in the file declare the same id.
    #[error("duplicate node id: {id}")]
    DuplicateId {
        /// The colliding identifier
        id: String,
    },

    /// The selection references a node that does not exist.
    #[error("unknown node id in selection: {id}")]
    UnknownId {
        /// The dangling identifier
        id: String,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single issue found while validating a documentation record.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Path to the problematic field (e.g. "properties[2].appliedTo.nodeId")
    pub path: String,
    /// Description of the issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Validation failure that rejects the record
    Error,
    /// Potential issue that does not reject the record
    Warning,
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `docuframe` operations.
pub type Result<T> = std::result::Result<T, DocuframeError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::INPUT_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::HOST_ERROR, 4);
        assert_eq!(ExitCode::SCENE_ERROR, 5);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
    }

    #[test]
    fn test_input_error_exit_code() {
        let err: DocuframeError = InputError::InvalidSelection.into();
        assert_eq!(err.exit_code(), ExitCode::INPUT_ERROR);
    }

    #[test]
    fn test_host_error_exit_code() {
        let err: DocuframeError = HostError::Unavailable("test".to_string()).into();
        assert_eq!(err.exit_code(), ExitCode::HOST_ERROR);
    }

    #[test]
    fn test_scene_error_exit_code() {
        let err: DocuframeError = SceneError::DuplicateId {
            id: "1:2".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::SCENE_ERROR);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: DocuframeError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_font_load_display() {
        let err = HostError::FontLoad {
            family: "Inter".to_string(),
            style: "Regular".to_string(),
            message: "not available".to_string(),
        };
        assert!(err.to_string().contains("Inter"));
        assert!(err.to_string().contains("not available"));
    }

    #[test]
    fn test_validation_issue_display() {
        let issue = ValidationIssue {
            path: "properties[0].name".to_string(),
            message: "property name is empty".to_string(),
            severity: Severity::Error,
        };
        assert_eq!(
            issue.to_string(),
            "error: property name is empty at properties[0].name"
        );
    }

    #[test]
    fn test_validation_issue_warning_display() {
        let issue = ValidationIssue {
            path: "header.componentName".to_string(),
            message: "component name is empty".to_string(),
            severity: Severity::Warning,
        };
        assert_eq!(
            issue.to_string(),
            "warning: component name is empty at header.componentName"
        );
    }
}
