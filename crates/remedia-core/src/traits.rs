//! Trait seams for the REMEDIA matcher.
//!
//! - `MedicationCatalog`: read-only source of records, injected at construction
//! - `SimilarityScorer`: string similarity used to rank suggestions
//!
//! The matcher only depends on these traits, so fixture catalogs and
//! alternative scoring functions can be swapped in without touching the
//! search orchestration.

use remedia_contracts::medication::MedicationRecord;

/// A fixed, immutable list of medication records.
///
/// Implementations must return the same slice, in the same order, for the
/// lifetime of the value. Iteration order decides ties in the matcher.
pub trait MedicationCatalog: Send + Sync {
    /// All records, in catalog order.
    fn records(&self) -> &[MedicationRecord];

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

impl MedicationCatalog for Vec<MedicationRecord> {
    fn records(&self) -> &[MedicationRecord] {
        self
    }
}

/// A similarity function over two strings.
///
/// Implementations must be pure, case-insensitive, and return a value in
/// `[0.0, 1.0]`, with `1.0` reserved for equal strings and `0.8` for strings
/// where one contains the other. The matcher's suggestion band relies on
/// those two values.
pub trait SimilarityScorer: Send + Sync {
    /// Score `a` against `b`.
    fn score(&self, a: &str, b: &str) -> f64;

    /// Short identifier for logs.
    fn name(&self) -> &'static str;
}
