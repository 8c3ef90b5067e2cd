//! TOML-driven catalog implementation.
//!
//! `TomlCatalog` loads a `CatalogConfig` from a TOML string or file,
//! validates it, and implements the `MedicationCatalog` trait from
//! remedia-core. Once built it is never mutated.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use remedia_contracts::{
    error::{RemediaError, RemediaResult},
    medication::MedicationRecord,
    settings::MatchSettings,
};
use remedia_core::{traits::MedicationCatalog, MedicationMatcher};

use crate::schema::{validate_records, validate_settings, CatalogConfig};

/// A validated, read-only medication catalog.
///
/// Construct via `from_toml_str`, `from_file` or `from_records`, then hand
/// it to a `MedicationMatcher` (or call `into_matcher`).
///
/// ```rust,ignore
/// use remedia_catalog::TomlCatalog;
///
/// let catalog = TomlCatalog::from_file(Path::new("catalogs/anvisa.toml"))?;
/// let matcher = catalog.into_matcher();
/// ```
#[derive(Debug, Clone)]
pub struct TomlCatalog {
    records: Vec<MedicationRecord>,
    settings: MatchSettings,
}

impl TomlCatalog {
    /// Parse `s` as TOML and build a validated catalog.
    ///
    /// Returns `RemediaError::ConfigError` if the TOML is malformed or does
    /// not match the `CatalogConfig` schema, and the validation errors from
    /// `CatalogConfig::validate` otherwise.
    pub fn from_toml_str(s: &str) -> RemediaResult<Self> {
        let config: CatalogConfig = toml::from_str(s).map_err(|e| RemediaError::ConfigError {
            reason: format!("failed to parse catalog TOML: {}", e),
        })?;
        config.validate()?;

        debug!(
            medications = config.medications.len(),
            scorer = ?config.matching.scorer,
            "catalog parsed"
        );

        Ok(Self {
            records: config.medications,
            settings: config.matching,
        })
    }

    /// Read the file at `path` and parse it as a TOML catalog.
    pub fn from_file(path: &Path) -> RemediaResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| RemediaError::ConfigError {
            reason: format!("failed to read catalog file '{}': {}", path.display(), e),
        })?;
        let catalog = Self::from_toml_str(&contents)?;

        info!(
            path = %path.display(),
            medications = catalog.records.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Build a catalog from records already in memory.
    pub fn from_records(
        records: Vec<MedicationRecord>,
        settings: MatchSettings,
    ) -> RemediaResult<Self> {
        validate_settings(&settings)?;
        validate_records(&records)?;
        Ok(Self { records, settings })
    }

    /// The matcher settings declared by the catalog.
    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Look up a record by exact name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&MedicationRecord> {
        let name = name.trim().to_lowercase();
        self.records.iter().find(|r| r.name.to_lowercase() == name)
    }

    /// Wrap the catalog in a matcher configured from its own settings.
    pub fn into_matcher(self) -> MedicationMatcher {
        let settings = self.settings.clone();
        MedicationMatcher::with_settings(Arc::new(self), settings)
    }
}

impl MedicationCatalog for TomlCatalog {
    fn records(&self) -> &[MedicationRecord] {
        &self.records
    }
}
