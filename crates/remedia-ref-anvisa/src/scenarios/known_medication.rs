//! Scenario 1: Known Medication
//!
//! A citizen types the generic name printed on a prescription. The matcher
//! resolves it in the exact/substring phase and lists same-substance
//! alternatives the citizen can ask for at a SUS pharmacy.
//!
//! Walk-through:
//!   1. "dipirona" → DIPIRONA 500MG, no other product with that substance
//!   2. "omeprazol" → OMEPRAZOL 20MG, with LOSEC 20MG as alternative
//!   3. "LOSEC 20MG" → exact name wins over the earlier omeprazole record

use tracing::{info, warn};

use remedia_contracts::error::RemediaResult;

use crate::{report::to_text, sample_data::sample_matcher};

/// Queries shown by this scenario, with the record each must resolve to.
pub const QUERIES: [(&str, &str); 3] = [
    ("dipirona", "DIPIRONA 500MG"),
    ("omeprazol", "OMEPRAZOL 20MG"),
    ("LOSEC 20MG", "LOSEC 20MG"),
];

/// Run Scenario 1: Known Medication.
pub fn run_scenario() -> RemediaResult<()> {
    println!("=== Scenario 1: Known Medication ===");
    println!();

    let matcher = sample_matcher()?;

    for (query, expected) in QUERIES {
        let result = matcher.consult(query);
        println!("{}", to_text(query, &result));
        println!();

        let resolved = result.medication().map(|m| m.name.as_str());
        if resolved == Some(expected) {
            info!(query, medication = expected, "scenario query resolved");
        } else {
            warn!(query, expected, resolved = ?resolved, "scenario query resolved unexpectedly");
        }
    }

    println!("  Scenario 1 complete.");
    println!();
    Ok(())
}
