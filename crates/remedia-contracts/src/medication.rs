//! Medication catalog entry.
//!
//! A `MedicationRecord` is read-only reference data. The matcher only looks
//! at `name` and `active_substance`; every other field is carried through
//! into results untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of the medication catalog.
///
/// `name` is the display name including strength (e.g. `"OMEPRAZOL 20MG"`),
/// uppercase by convention and unique within a catalog. Several records may
/// share an `active_substance`; those are brand/generic alternatives of each
/// other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRecord {
    /// Display name, including strength or dose.
    pub name: String,
    /// Generic / active ingredient name, stored in its canonical spelling.
    #[serde(alias = "active_substance")]
    pub active_substance: String,
    /// ANVISA registration number.
    #[serde(alias = "registration_number")]
    pub registration_number: String,
    /// Registration holder.
    pub company: String,
    /// Therapeutic category (e.g. "Analgésico").
    pub category: String,
    /// Date the registration expires.
    #[serde(alias = "expiry_date")]
    pub expiry_date: NaiveDate,
    /// Subject to special control (Portaria 344/98).
    #[serde(default, alias = "controlled_substance")]
    pub controlled_substance: bool,
    /// A generic version is on the market.
    #[serde(default, alias = "generic_available")]
    pub generic_available: bool,
    /// Dispensed by SUS.
    #[serde(default, alias = "sus_included")]
    pub sus_included: bool,
    /// Part of the specialised pharmaceutical component (CEAF).
    #[serde(default, alias = "ceaf_included")]
    pub ceaf_included: bool,
}

impl MedicationRecord {
    /// Build a record with the required fields and every flag cleared.
    pub fn new(
        name: impl Into<String>,
        active_substance: impl Into<String>,
        registration_number: impl Into<String>,
        company: impl Into<String>,
        category: impl Into<String>,
        expiry_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            active_substance: active_substance.into(),
            registration_number: registration_number.into(),
            company: company.into(),
            category: category.into(),
            expiry_date,
            controlled_substance: false,
            generic_available: false,
            sus_included: false,
            ceaf_included: false,
        }
    }

    /// True if `other` is a different product with the same active substance.
    ///
    /// Substances are compared exactly since catalog values are canonical.
    pub fn is_alternative_to(&self, other: &MedicationRecord) -> bool {
        self.active_substance == other.active_substance && self.name != other.name
    }
}
