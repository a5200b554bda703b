//! Per-field render outcomes.
//!
//! Template-shape mismatches never abort a render; they are recorded
//! here instead. The default user-visible behavior is unchanged - the
//! report is returned to the caller, not surfaced.

use chrono::{DateTime, Utc};

use crate::scene::NodeId;

/// What happened to one attempted fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The target was found and mutated.
    Filled,
    /// No node with the expected name exists in scope.
    SkippedMissingTarget,
    /// A node was found but is of a kind the operation cannot use.
    SkippedWrongKind,
}

/// One report entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    /// The record key or section step that was attempted
    /// (e.g. "componentName", "properties.list").
    pub key: String,
    /// What happened.
    pub outcome: FieldOutcome,
    /// The node that was filled or rejected, when one was found.
    pub target: Option<NodeId>,
}

/// Everything one render pass did.
#[derive(Debug, Clone)]
pub struct RenderReport {
    /// When the pass started.
    pub started_at: DateTime<Utc>,
    /// When the pass finished; `None` while in flight.
    pub finished_at: Option<DateTime<Utc>>,
    /// Entries in the order they were attempted.
    pub fields: Vec<FieldRecord>,
}

impl Default for RenderReport {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderReport {
    /// Creates an empty report stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            fields: Vec::new(),
        }
    }

    /// Appends an entry.
    pub(crate) fn record(&mut self, key: &str, outcome: FieldOutcome, target: Option<NodeId>) {
        self.fields.push(FieldRecord {
            key: key.to_string(),
            outcome,
            target,
        });
    }

    /// Stamps the finish time.
    pub(crate) fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Number of successful fills.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| f.outcome == FieldOutcome::Filled)
            .count()
    }

    /// Number of skipped fills of either kind.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.fields.len() - self.filled()
    }

    /// First recorded outcome for a key, if any.
    #[must_use]
    pub fn outcome_for(&self, key: &str) -> Option<FieldOutcome> {
        self.fields.iter().find(|f| f.key == key).map(|f| f.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_outcome() {
        let mut report = RenderReport::new();
        report.record("componentName", FieldOutcome::Filled, None);
        report.record("libraryName", FieldOutcome::SkippedMissingTarget, None);
        report.record("properties", FieldOutcome::SkippedWrongKind, None);
        assert_eq!(report.filled(), 1);
        assert_eq!(report.skipped(), 2);
    }

    #[test]
    fn outcome_for_returns_first_entry() {
        let mut report = RenderReport::new();
        report.record("name", FieldOutcome::SkippedMissingTarget, None);
        report.record("name", FieldOutcome::Filled, None);
        assert_eq!(
            report.outcome_for("name"),
            Some(FieldOutcome::SkippedMissingTarget)
        );
        assert_eq!(report.outcome_for("absent"), None);
    }

    #[test]
    fn finish_stamps_time() {
        let mut report = RenderReport::new();
        assert!(report.finished_at.is_none());
        report.finish();
        assert!(report.finished_at.is_some());
    }
}
