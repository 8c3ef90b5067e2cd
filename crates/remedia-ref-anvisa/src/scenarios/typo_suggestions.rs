//! Scenario 3: Typo Suggestions
//!
//! Free text from the public is full of typos and missing spaces. When no
//! record matches, the matcher scores every record and offers up to three
//! "did you mean" names strictly inside the suggestion band.
//!
//! Walk-through:
//!   1. "dipirona500" → no substring match; DIPIRONA 500MG suggested (0.75)
//!   2. "omeprasol"   → OMEPRAZOL 20MG and LOSEC 20MG suggested
//!   3. "xyz"         → nothing close enough; no suggestions

use tracing::info;

use remedia_contracts::error::RemediaResult;

use crate::{report::to_text, sample_data::sample_matcher};

/// Run Scenario 3: Typo Suggestions.
pub fn run_scenario() -> RemediaResult<()> {
    println!("=== Scenario 3: Typo Suggestions ===");
    println!();

    let matcher = sample_matcher()?;

    for query in ["dipirona500", "omeprasol", "xyz"] {
        let result = matcher.consult(query);
        println!("{}", to_text(query, &result));
        println!();
        info!(
            query,
            suggestions = ?result.suggestion_names(),
            "scenario query consulted"
        );
    }

    println!("  Scenario 3 complete.");
    println!();
    Ok(())
}
