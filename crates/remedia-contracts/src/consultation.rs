//! Consultation results.
//!
//! `ConsultationResult` is what the matcher returns for one query. It is
//! created per call and owned by the caller; nothing about it is cached.
//!
//! At the output boundary the result is flattened into the widget's shape
//! (`found`, optional `medication`, `alternatives`, `suggestions`) through
//! `ConsultationView`. Suggestion scores are dropped there.

use serde::{Deserialize, Serialize};

use crate::medication::MedicationRecord;

/// A catalog name proposed for a query that matched nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested record's `name`.
    pub name: String,
    /// Similarity between the query and the record, strictly inside the
    /// configured band.
    pub score: f64,
}

/// The outcome of a single consultation.
///
/// Callers pattern-match on this:
/// - `Found` → show the record and its same-substance alternatives
/// - `NotFound` → show loosely related records and "did you mean" names
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "ConsultationView")]
pub enum ConsultationResult {
    /// A record matched the query by name or active substance.
    Found {
        /// The first matching record.
        medication: MedicationRecord,
        /// Other records with exactly the same active substance.
        alternatives: Vec<MedicationRecord>,
    },

    /// Nothing matched; best-effort hints instead.
    NotFound {
        /// Records sharing a significant token with the query.
        alternatives: Vec<MedicationRecord>,
        /// Ranked suggestions, highest score first.
        suggestions: Vec<Suggestion>,
    },
}

impl ConsultationResult {
    /// An unmatched result with nothing to offer.
    pub fn empty() -> Self {
        ConsultationResult::NotFound {
            alternatives: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ConsultationResult::Found { .. })
    }

    /// The matched record, if any.
    pub fn medication(&self) -> Option<&MedicationRecord> {
        match self {
            ConsultationResult::Found { medication, .. } => Some(medication),
            ConsultationResult::NotFound { .. } => None,
        }
    }

    pub fn alternatives(&self) -> &[MedicationRecord] {
        match self {
            ConsultationResult::Found { alternatives, .. }
            | ConsultationResult::NotFound { alternatives, .. } => alternatives,
        }
    }

    /// Scored suggestions. Always empty for `Found`.
    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            ConsultationResult::Found { .. } => &[],
            ConsultationResult::NotFound { suggestions, .. } => suggestions,
        }
    }

    /// Suggested names in rank order.
    pub fn suggestion_names(&self) -> Vec<&str> {
        self.suggestions().iter().map(|s| s.name.as_str()).collect()
    }
}

/// The flat output shape consumed by the consultation widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationView {
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medication: Option<MedicationRecord>,
    pub alternatives: Vec<MedicationRecord>,
    pub suggestions: Vec<String>,
}

impl From<ConsultationResult> for ConsultationView {
    fn from(result: ConsultationResult) -> Self {
        match result {
            ConsultationResult::Found { medication, alternatives } => ConsultationView {
                found: true,
                medication: Some(medication),
                alternatives,
                suggestions: Vec::new(),
            },
            ConsultationResult::NotFound { alternatives, suggestions } => ConsultationView {
                found: false,
                medication: None,
                alternatives,
                suggestions: suggestions.into_iter().map(|s| s.name).collect(),
            },
        }
    }
}
