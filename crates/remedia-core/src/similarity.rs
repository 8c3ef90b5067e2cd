//! String similarity functions.
//!
//! Both scorers share the same outer bands:
//!
//! | relation (case-insensitive)     | score |
//! |---------------------------------|-------|
//! | equal                           | 1.0   |
//! | either side empty               | 0.0   |
//! | one contains the other          | 0.8   |
//! | otherwise                       | scorer-specific, in `[0, 1]` |
//!
//! `HeuristicScorer` fills the last band with the larger of a common-prefix
//! ratio and a character-set Jaccard index. It is cheap and tolerates typos
//! that keep a prefix or a similar character inventory, but it is not an
//! edit distance. `LevenshteinScorer` uses normalized Damerau-Levenshtein
//! instead.

use std::collections::HashSet;

use remedia_contracts::settings::ScorerKind;

use crate::traits::SimilarityScorer;

/// Score given when one string contains the other.
pub const CONTAINMENT_SCORE: f64 = 0.8;

/// Heuristic similarity between `a` and `b`, in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    banded(a, b, |a, b| prefix_score(a, b).max(jaccard_score(a, b)))
}

/// Apply the shared equality/empty/containment bands, then defer to `fallback`
/// with both strings lower-cased.
fn banded(a: &str, b: &str, fallback: impl Fn(&str, &str) -> f64) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a.contains(&b) || b.contains(&a) {
        return CONTAINMENT_SCORE;
    }
    fallback(&a, &b)
}

/// Matching characters at the same position from the start, up to the first
/// mismatch, divided by the longer length.
pub fn prefix_score(a: &str, b: &str) -> f64 {
    let longer = a.chars().count().max(b.chars().count());
    if longer == 0 {
        return 0.0;
    }
    let common = a
        .chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count();
    common as f64 / longer as f64
}

/// `|A ∩ B| / |A ∪ B|` over the distinct lower-cased characters of each side.
pub fn jaccard_score(a: &str, b: &str) -> f64 {
    let set_a: HashSet<char> = a.chars().flat_map(char::to_lowercase).collect();
    let set_b: HashSet<char> = b.chars().flat_map(char::to_lowercase).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}

/// The default scorer: [`similarity`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl SimilarityScorer for HeuristicScorer {
    fn score(&self, a: &str, b: &str) -> f64 {
        similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Normalized Damerau-Levenshtein inside the shared bands.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinScorer;

impl SimilarityScorer for LevenshteinScorer {
    fn score(&self, a: &str, b: &str) -> f64 {
        // Stays below the equality band.
        banded(a, b, |a, b| strsim::normalized_damerau_levenshtein(a, b).min(0.99))
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Build the scorer selected by `kind`.
pub fn scorer_for(kind: ScorerKind) -> Box<dyn SimilarityScorer> {
    match kind {
        ScorerKind::Heuristic => Box::new(HeuristicScorer),
        ScorerKind::Levenshtein => Box::new(LevenshteinScorer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_strings_score_one() {
        assert_eq!(similarity("omeprazol", "omeprazol"), 1.0);
        assert_eq!(similarity("OMEPRAZOL", "omeprazol"), 1.0);
    }

    #[test]
    fn empty_side_scores_zero() {
        assert_eq!(similarity("", "omeprazol"), 0.0);
        assert_eq!(similarity("omeprazol", ""), 0.0);
        // Two empty strings are equal.
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn containment_scores_point_eight() {
        assert_eq!(similarity("dipirona", "DIPIRONA 500MG"), CONTAINMENT_SCORE);
        assert_eq!(similarity("LOSARTANA POTÁSSICA 50MG", "potássica"), CONTAINMENT_SCORE);
    }

    #[test]
    fn unrelated_strings_score_low() {
        assert!(similarity("xyz", "abcd") < 0.3);
        assert_eq!(similarity("xyz", "abcd"), 0.0);
    }

    #[test]
    fn prefix_score_stops_at_first_mismatch() {
        // "omepra" shared, then 's' vs 'z'; longer side has 9 chars.
        let score = prefix_score("omeprasol", "omeprazol");
        assert!((score - 6.0 / 9.0).abs() < 1e-9, "got {score}");
        assert_eq!(prefix_score("abc", "xbc"), 0.0);
        assert_eq!(prefix_score("", ""), 0.0);
    }

    #[test]
    fn prefix_score_counts_characters_not_bytes() {
        // 'á' is two bytes in UTF-8 but one character.
        let score = prefix_score("potássica", "potássio");
        assert!((score - 7.0 / 9.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn jaccard_uses_distinct_characters() {
        // {a, b} vs {a, b, c}
        let score = jaccard_score("aabb", "abc");
        assert!((score - 2.0 / 3.0).abs() < 1e-9, "got {score}");
        assert_eq!(jaccard_score("", ""), 0.0);
    }

    #[test]
    fn heuristic_takes_max_of_prefix_and_jaccard() {
        // prefix 6/9 ≈ 0.667, Jaccard 7/9 ≈ 0.778
        let score = similarity("omeprasol", "omeprazol");
        assert!((score - 7.0 / 9.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn typo_without_space_scores_in_suggestion_band() {
        let score = similarity("dipirona500", "DIPIRONA 500MG");
        assert!(score > 0.3 && score < 1.0, "got {score}");
        // 9 shared distinct chars of 12 in the union.
        assert!((score - 0.75).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn levenshtein_keeps_bands() {
        let lev = LevenshteinScorer;
        assert_eq!(lev.score("Omeprazol", "omeprazol"), 1.0);
        assert_eq!(lev.score("", "omeprazol"), 0.0);
        assert_eq!(lev.score("dipirona", "dipirona 500mg"), CONTAINMENT_SCORE);

        let typo = lev.score("omeprasol", "omeprazol");
        assert!(typo > 0.3 && typo < 1.0, "got {typo}");
        assert!(lev.score("xyz", "abcd") < 0.3);
    }

    #[test]
    fn scorer_for_selects_implementation() {
        assert_eq!(scorer_for(ScorerKind::Heuristic).name(), "heuristic");
        assert_eq!(scorer_for(ScorerKind::Levenshtein).name(), "levenshtein");
    }
}
