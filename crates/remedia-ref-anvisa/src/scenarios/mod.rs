//! Consultation walkthroughs over the sample ANVISA catalog.
//!
//! Each scenario is a self-contained module that builds a matcher from the
//! embedded catalog and shows one path through the consultation phases.

pub mod known_medication;
pub mod substring_search;
pub mod typo_suggestions;
