//! # remedia-catalog
//!
//! A TOML-driven, validated medication catalog for the REMEDIA matcher.
//!
//! ## Overview
//!
//! This crate provides [`TomlCatalog`], which implements the
//! [`MedicationCatalog`](remedia_core::traits::MedicationCatalog) trait.
//! Records are declared in a TOML file as `[[medications]]` tables; an
//! optional `[matching]` table tunes the matcher.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use remedia_catalog::TomlCatalog;
//!
//! let catalog = TomlCatalog::from_file(Path::new("catalogs/anvisa.toml"))?;
//! let result = catalog.into_matcher().consult("dipirona");
//! ```
//!
//! ## Record order
//!
//! Records keep their declaration order. When several records match a
//! query, the first one declared wins.

pub mod catalog;
pub mod schema;

pub use catalog::TomlCatalog;
pub use schema::CatalogConfig;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Write;

    use remedia_contracts::{error::RemediaError, settings::ScorerKind};
    use remedia_core::traits::MedicationCatalog;

    use crate::TomlCatalog;

    const TWO_RECORDS: &str = r#"
        [[medications]]
        name = "OMEPRAZOL 20MG"
        active_substance = "Omeprazol"
        registration_number = "1.0043.0925"
        company = "Eurofarma"
        category = "Antiulceroso"
        expiry_date = "2029-03-31"
        generic_available = true
        sus_included = true

        [[medications]]
        name = "LOSEC 20MG"
        active_substance = "Omeprazol"
        registration_number = "1.1618.0066"
        company = "AstraZeneca"
        category = "Antiulceroso"
        expiry_date = "2027-11-30"
    "#;

    // ── 1. parsing ───────────────────────────────────────────────────────────

    /// Records keep their order, flags default to false, settings default.
    #[test]
    fn test_parse_records_in_order() {
        let catalog = TomlCatalog::from_toml_str(TWO_RECORDS).unwrap();

        let names: Vec<&str> = catalog.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["OMEPRAZOL 20MG", "LOSEC 20MG"]);

        let omeprazol = &catalog.records()[0];
        assert!(omeprazol.generic_available);
        assert!(omeprazol.sus_included);
        assert!(!omeprazol.controlled_substance);
        assert_eq!(omeprazol.expiry_date.to_string(), "2029-03-31");

        assert_eq!(catalog.settings().suggestion_limit, 3);
        assert_eq!(catalog.settings().scorer, ScorerKind::Heuristic);
    }

    /// An empty document is a valid, empty catalog.
    #[test]
    fn test_empty_catalog() {
        let catalog = TomlCatalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
        assert!(!catalog.into_matcher().consult("omeprazol").is_found());
    }

    // ── 2. matching settings ─────────────────────────────────────────────────

    #[test]
    fn test_matching_table_overrides_defaults() {
        let toml = format!(
            r#"
            [matching]
            suggestion_limit = 5
            scorer = "levenshtein"
            {TWO_RECORDS}
            "#
        );

        let catalog = TomlCatalog::from_toml_str(&toml).unwrap();
        assert_eq!(catalog.settings().suggestion_limit, 5);
        assert_eq!(catalog.settings().scorer, ScorerKind::Levenshtein);
        // Unspecified keys keep their defaults.
        assert_eq!(catalog.settings().min_token_chars, 4);
    }

    #[test]
    fn test_zero_suggestion_limit_rejected() {
        let toml = "[matching]\nsuggestion_limit = 0\n";
        match TomlCatalog::from_toml_str(toml) {
            Err(RemediaError::ConfigError { reason }) => {
                assert!(reason.contains("suggestion_limit"), "unexpected reason: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let toml = "[matching]\nmin_suggestion_score = 1.0\n";
        match TomlCatalog::from_toml_str(toml) {
            Err(RemediaError::ConfigError { reason }) => {
                assert!(reason.contains("min_suggestion_score"), "unexpected reason: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 3. record validation ─────────────────────────────────────────────────

    /// Names are unique regardless of case.
    #[test]
    fn test_duplicate_name_rejected() {
        let toml = TWO_RECORDS.replace("LOSEC 20MG", "omeprazol 20mg");
        match TomlCatalog::from_toml_str(&toml) {
            Err(RemediaError::DuplicateMedication { name }) => {
                assert_eq!(name, "omeprazol 20mg");
            }
            other => panic!("expected DuplicateMedication, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_active_substance_rejected() {
        let toml = TWO_RECORDS.replacen(
            "active_substance = \"Omeprazol\"",
            "active_substance = \"  \"",
            1,
        );
        match TomlCatalog::from_toml_str(&toml) {
            Err(RemediaError::InvalidRecord { name, reason }) => {
                assert_eq!(name, "OMEPRAZOL 20MG");
                assert!(reason.contains("active substance"));
            }
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    /// A record missing a required field does not deserialize.
    #[test]
    fn test_missing_required_field_rejected() {
        let toml = r#"
            [[medications]]
            name = "CAPTOPRIL 25MG"
            active_substance = "Captopril"
        "#;
        match TomlCatalog::from_toml_str(toml) {
            Err(RemediaError::ConfigError { reason }) => {
                assert!(reason.contains("failed to parse catalog TOML"), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 4. TOML parse error ──────────────────────────────────────────────────

    #[test]
    fn test_toml_parse_error() {
        let bad_toml = r#"
            this is not valid toml ][[[
        "#;

        match TomlCatalog::from_toml_str(bad_toml) {
            Err(RemediaError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse catalog TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 5. files ─────────────────────────────────────────────────────────────

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_RECORDS.as_bytes()).unwrap();

        let catalog = TomlCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("  losec 20mg ").map(|r| r.company.as_str()), Some("AstraZeneca"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        match TomlCatalog::from_file(&path) {
            Err(RemediaError::ConfigError { reason }) => {
                assert!(reason.contains("failed to read catalog file"), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 6. matcher wiring ────────────────────────────────────────────────────

    #[test]
    fn test_into_matcher_uses_catalog_settings() {
        let toml = format!("[matching]\nsuggestion_limit = 1\n{TWO_RECORDS}");
        let matcher = TomlCatalog::from_toml_str(&toml).unwrap().into_matcher();

        assert_eq!(matcher.settings().suggestion_limit, 1);
        assert_eq!(matcher.consult("omeprasol").suggestions().len(), 1);

        let found = matcher.consult("losec");
        let alternatives: Vec<&str> =
            found.alternatives().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(alternatives, vec!["OMEPRAZOL 20MG"]);
    }

    #[test]
    fn test_from_records_validates() {
        let catalog = TomlCatalog::from_toml_str(TWO_RECORDS).unwrap();
        let mut records = catalog.records().to_vec();
        records.push(records[0].clone());

        assert!(matches!(
            TomlCatalog::from_records(records, Default::default()),
            Err(RemediaError::DuplicateMedication { .. })
        ));
    }
}
