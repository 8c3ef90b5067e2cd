//! Plain-text and JSON rendering of consultation results.

use remedia_contracts::{
    consultation::{ConsultationResult, ConsultationView},
    error::{RemediaError, RemediaResult},
    medication::MedicationRecord,
};

/// Render `result` as the widget's JSON shape.
pub fn to_json(result: &ConsultationResult) -> RemediaResult<String> {
    let view = ConsultationView::from(result.clone());
    serde_json::to_string_pretty(&view).map_err(|e| RemediaError::Serialization {
        reason: format!("failed to render consultation as JSON: {}", e),
    })
}

/// Render `result` for a terminal, one fact per line.
pub fn to_text(query: &str, result: &ConsultationResult) -> String {
    let mut lines = vec![format!("  Query: {:?}", query)];

    match result {
        ConsultationResult::Found { medication, alternatives } => {
            lines.push(format!("  Found:            {}", describe(medication)));
            lines.push(format!(
                "  Registration:     {} ({})",
                medication.registration_number, medication.company
            ));
            lines.push(format!("  Valid until:      {}", medication.expiry_date));
            lines.push(format!("  Access:           {}", access_flags(medication)));
            if alternatives.is_empty() {
                lines.push("  Alternatives:     none in catalog".to_string());
            } else {
                for alt in alternatives {
                    lines.push(format!("  Alternative:      {}", describe(alt)));
                }
            }
        }
        ConsultationResult::NotFound { alternatives, suggestions } => {
            lines.push("  Found:            no".to_string());
            for alt in alternatives {
                lines.push(format!("  Related record:   {}", describe(alt)));
            }
            if suggestions.is_empty() {
                lines.push("  Did you mean:     (no suggestions)".to_string());
            }
            for s in suggestions {
                lines.push(format!("  Did you mean:     {} (score {:.2})", s.name, s.score));
            }
        }
    }

    lines.join("\n")
}

fn describe(record: &MedicationRecord) -> String {
    format!("{} [{}; {}]", record.name, record.active_substance, record.category)
}

fn access_flags(record: &MedicationRecord) -> String {
    let mut flags = Vec::new();
    if record.sus_included {
        flags.push("SUS");
    }
    if record.ceaf_included {
        flags.push("CEAF");
    }
    if record.generic_available {
        flags.push("generic available");
    }
    if record.controlled_substance {
        flags.push("controlled (Portaria 344/98)");
    }
    if flags.is_empty() {
        "private purchase only".to_string()
    } else {
        flags.join(", ")
    }
}
