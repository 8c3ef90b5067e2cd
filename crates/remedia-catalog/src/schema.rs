//! Catalog file schema and validation.
//!
//! A `CatalogConfig` is deserialized from TOML. It holds optional matcher
//! settings and an ordered list of medication records. Record order is
//! significant: it decides which record wins when several match a query.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use remedia_contracts::{
    error::{RemediaError, RemediaResult},
    medication::MedicationRecord,
    settings::MatchSettings,
};

/// The top-level structure deserialized from a TOML catalog file.
///
/// Example:
/// ```toml
/// [matching]
/// suggestion_limit = 3
///
/// [[medications]]
/// name = "OMEPRAZOL 20MG"
/// active_substance = "Omeprazol"
/// registration_number = "1.0043.0925"
/// company = "Eurofarma"
/// category = "Antiulceroso"
/// expiry_date = "2029-03-31"
/// generic_available = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Matcher thresholds. Missing keys take their defaults.
    #[serde(default)]
    pub matching: MatchSettings,

    /// Catalog records in matching order.
    #[serde(default)]
    pub medications: Vec<MedicationRecord>,
}

impl CatalogConfig {
    /// Check the settings and records before they reach the matcher.
    ///
    /// Rejects:
    /// - a zero `suggestion_limit` or a `min_suggestion_score` outside `[0, 1)`
    /// - records with a blank `name` or `active_substance`
    /// - two records whose names differ only by case or surrounding spaces
    pub fn validate(&self) -> RemediaResult<()> {
        validate_settings(&self.matching)?;
        validate_records(&self.medications)
    }
}

pub(crate) fn validate_settings(settings: &MatchSettings) -> RemediaResult<()> {
    if settings.suggestion_limit == 0 {
        return Err(RemediaError::ConfigError {
            reason: "matching.suggestion_limit must be at least 1".to_string(),
        });
    }
    if !(0.0..1.0).contains(&settings.min_suggestion_score) {
        return Err(RemediaError::ConfigError {
            reason: format!(
                "matching.min_suggestion_score must be in [0, 1), got {}",
                settings.min_suggestion_score
            ),
        });
    }
    Ok(())
}

pub(crate) fn validate_records(records: &[MedicationRecord]) -> RemediaResult<()> {
    let mut seen = HashSet::new();

    for record in records {
        if record.name.trim().is_empty() {
            return Err(RemediaError::InvalidRecord {
                name: record.registration_number.clone(),
                reason: "name is empty".to_string(),
            });
        }
        if record.active_substance.trim().is_empty() {
            return Err(RemediaError::InvalidRecord {
                name: record.name.clone(),
                reason: "active substance is empty".to_string(),
            });
        }
        if !seen.insert(record.name.trim().to_lowercase()) {
            return Err(RemediaError::DuplicateMedication {
                name: record.name.clone(),
            });
        }
    }

    Ok(())
}
