//! # remedia-ref-anvisa
//!
//! Reference runtime for the REMEDIA medication matcher, built on a sample
//! ANVISA catalog.
//!
//! Demonstrates three consultation paths:
//!
//! 1. **Known Medication**: exact/substring resolution with same-substance
//!    alternatives.
//! 2. **Substring Search**: partial names and the loose token phase.
//! 3. **Typo Suggestions**: similarity-ranked "did you mean" names.
//!
//! All data is hardcoded and fictional. No external API calls are made.

pub mod report;
pub mod sample_data;
pub mod scenarios;
