//! Scenario 2: Substring Search
//!
//! Prosecutors often have only part of a name from a complaint. Any substring
//! of a record's name or active substance resolves to the first record in
//! catalog order; a query that merely shares a word falls through to the
//! loose token phase instead.
//!
//! Walk-through:
//!   1. "losartana"      → LOSARTANA POTÁSSICA 50MG (+ COZAAR 50MG)
//!   2. "cloridrato"     → METFORMINA 850MG via the active substance (+ GLIFAGE)
//!   3. "losartan forte" → no match; both losartana records as related records

use tracing::info;

use remedia_contracts::error::RemediaResult;

use crate::{report::to_text, sample_data::sample_matcher};

/// Run Scenario 2: Substring Search.
pub fn run_scenario() -> RemediaResult<()> {
    println!("=== Scenario 2: Substring Search ===");
    println!();

    let matcher = sample_matcher()?;

    for query in ["losartana", "cloridrato", "losartan forte"] {
        let result = matcher.consult(query);
        println!("{}", to_text(query, &result));
        println!();
        info!(
            query,
            found = result.is_found(),
            alternatives = result.alternatives().len(),
            "scenario query consulted"
        );
    }

    println!("  Scenario 2 complete.");
    println!();
    Ok(())
}
