//! # remedia-contracts
//!
//! Shared types for the REMEDIA medication consultation matcher.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions and error types.

pub mod consultation;
pub mod error;
pub mod medication;
pub mod settings;
