//! # remedia-core
//!
//! Free-text medication matching for the REMEDIA consultation widget.
//!
//! This crate provides:
//! - The two seams (`MedicationCatalog`, `SimilarityScorer`)
//! - The similarity functions used to rank "did you mean" suggestions
//! - The `MedicationMatcher` that resolves a query against a catalog
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use remedia_core::MedicationMatcher;
//!
//! let matcher = MedicationMatcher::with_settings(Arc::new(records), settings);
//! let result = matcher.consult("dipirona");
//! ```

pub mod matcher;
pub mod similarity;
pub mod traits;

pub use matcher::MedicationMatcher;
pub use similarity::{similarity, HeuristicScorer, LevenshteinScorer};
