//! Matcher tuning knobs.
//!
//! Every field has a default, so a catalog file may omit the `[matching]`
//! table entirely or specify only the keys it wants to change.

use serde::{Deserialize, Serialize};

/// Which similarity function ranks suggestions.
///
/// Expressed in TOML as a kebab-case string:
/// ```toml
/// scorer = "heuristic"
/// scorer = "levenshtein"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScorerKind {
    /// Prefix / character-set heuristic.
    #[default]
    Heuristic,
    /// Normalized Damerau-Levenshtein with the same equality and containment bands.
    Levenshtein,
}

/// Thresholds applied by the matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// Maximum number of suggestions returned for an unmatched query.
    pub suggestion_limit: usize,
    /// Suggestions must score strictly above this value.
    pub min_suggestion_score: f64,
    /// Query tokens with fewer characters are ignored when looking for
    /// loosely related alternatives.
    pub min_token_chars: usize,
    /// Similarity function used for suggestions.
    pub scorer: ScorerKind,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            suggestion_limit: 3,
            min_suggestion_score: 0.3,
            min_token_chars: 4,
            scorer: ScorerKind::Heuristic,
        }
    }
}
