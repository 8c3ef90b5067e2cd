//! The medication consultation matcher.
//!
//! A consultation runs the query through three phases, stopping at the first
//! that produces a match:
//!
//!   Normalize → Exact/Substring → (no match) → Similar tokens + Suggestions
//!
//! The catalog is read-only and every call is independent, so one matcher
//! can serve any number of callers concurrently.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use remedia_contracts::{
    consultation::{ConsultationResult, Suggestion},
    medication::MedicationRecord,
    settings::MatchSettings,
};

use crate::similarity::scorer_for;
use crate::traits::{MedicationCatalog, SimilarityScorer};

/// Resolves free-text queries against a medication catalog.
pub struct MedicationMatcher {
    catalog: Arc<dyn MedicationCatalog>,
    scorer: Box<dyn SimilarityScorer>,
    settings: MatchSettings,
}

impl MedicationMatcher {
    /// Create a matcher with an explicit scorer.
    ///
    /// `settings.scorer` is ignored in favour of `scorer`.
    pub fn new(
        catalog: Arc<dyn MedicationCatalog>,
        scorer: Box<dyn SimilarityScorer>,
        settings: MatchSettings,
    ) -> Self {
        Self { catalog, scorer, settings }
    }

    /// Create a matcher using the scorer named in `settings`.
    pub fn with_settings(catalog: Arc<dyn MedicationCatalog>, settings: MatchSettings) -> Self {
        let scorer = scorer_for(settings.scorer);
        Self::new(catalog, scorer, settings)
    }

    pub fn catalog(&self) -> &dyn MedicationCatalog {
        &*self.catalog
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Resolve `query` against the catalog.
    ///
    /// # Phases
    ///
    /// 1. Trim and lower-case the query. An empty query returns
    ///    `ConsultationResult::empty()` without scoring anything.
    /// 2. Look for a record whose name equals the query, then for the first
    ///    record (catalog order) whose name or active substance contains the
    ///    query or is contained in it.
    /// 3. On a match, return it with every other record sharing its active
    ///    substance.
    /// 4. Otherwise collect records related to any query token of at least
    ///    `min_token_chars` characters, and rank suggestions by similarity.
    ///
    /// First-match-wins in step 2 is positional, not a "best" match: a
    /// broad query such as `"500"` resolves to whichever record comes first.
    pub fn consult(&self, query: &str) -> ConsultationResult {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            debug!("empty query, skipping consultation");
            return ConsultationResult::empty();
        }

        let records = self.catalog.records();

        if let Some(index) = self.find_match(&query) {
            let medication = records[index].clone();
            let alternatives: Vec<MedicationRecord> = records
                .iter()
                .filter(|r| r.is_alternative_to(&medication))
                .cloned()
                .collect();

            debug!(
                query = %query,
                medication = %medication.name,
                alternatives = alternatives.len(),
                "query matched catalog record"
            );
            return ConsultationResult::Found { medication, alternatives };
        }

        let alternatives = self.token_alternatives(&query);
        let suggestions = self.suggest(&query);

        debug!(
            query = %query,
            alternatives = alternatives.len(),
            suggestions = suggestions.len(),
            scorer = self.scorer.name(),
            "no catalog match, returning suggestions"
        );
        ConsultationResult::NotFound { alternatives, suggestions }
    }

    /// Index of the record matching a normalized query, if any.
    fn find_match(&self, query: &str) -> Option<usize> {
        let records = self.catalog.records();

        // Exact name first, so a full name is never shadowed by an earlier
        // record whose active substance happens to appear inside it.
        if let Some(index) = records.iter().position(|r| r.name.to_lowercase() == query) {
            return Some(index);
        }

        records.iter().position(|r| {
            overlaps(&r.name.to_lowercase(), query)
                || overlaps(&r.active_substance.to_lowercase(), query)
        })
    }

    /// Records sharing a significant token with the query.
    fn token_alternatives(&self, query: &str) -> Vec<MedicationRecord> {
        let tokens: Vec<&str> = query
            .split_whitespace()
            .filter(|t| t.chars().count() >= self.settings.min_token_chars)
            .collect();
        if tokens.is_empty() {
            return Vec::new();
        }

        self.catalog
            .records()
            .iter()
            .filter(|r| {
                let name = r.name.to_lowercase();
                let substance = r.active_substance.to_lowercase();
                tokens
                    .iter()
                    .any(|t| overlaps(&name, t) || overlaps(&substance, t))
            })
            .cloned()
            .collect()
    }

    /// Catalog names scoring strictly inside `(min_suggestion_score, 1.0)`,
    /// highest first, at most `suggestion_limit` of them.
    fn suggest(&self, query: &str) -> Vec<Suggestion> {
        let mut scored: Vec<Suggestion> = self
            .catalog
            .records()
            .iter()
            .map(|r| Suggestion {
                name: r.name.clone(),
                score: self
                    .scorer
                    .score(query, &r.name)
                    .max(self.scorer.score(query, &r.active_substance)),
            })
            .filter(|s| s.score > self.settings.min_suggestion_score && s.score < 1.0)
            .collect();

        // Stable: equal scores keep catalog order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        let mut seen = HashSet::new();
        scored.retain(|s| seen.insert(s.name.clone()));
        scored.truncate(self.settings.suggestion_limit);
        scored
    }
}

/// True if either non-empty string contains the other.
fn overlaps(field: &str, query: &str) -> bool {
    !field.is_empty() && (field.contains(query) || query.contains(field))
}

// ── Tests ────────────────────────────────────────────────────────────────────
