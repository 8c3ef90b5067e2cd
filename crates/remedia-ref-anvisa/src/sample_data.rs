//! Sample ANVISA catalog for the REMEDIA reference runtime.
//!
//! All data in this module is fictional. No external systems are contacted.
//! The catalog stands in for the ANVISA registry a production deployment
//! would synchronise from.

use remedia_catalog::TomlCatalog;
use remedia_contracts::error::RemediaResult;
use remedia_core::MedicationMatcher;

/// Embedded sample catalog, in declaration order.
pub const ANVISA_CATALOG: &str = include_str!("../catalogs/anvisa.toml");

/// Parse the embedded sample catalog.
pub fn sample_catalog() -> RemediaResult<TomlCatalog> {
    TomlCatalog::from_toml_str(ANVISA_CATALOG)
}

/// A matcher over the sample catalog, configured by its `[matching]` table.
pub fn sample_matcher() -> RemediaResult<MedicationMatcher> {
    Ok(sample_catalog()?.into_matcher())
}
