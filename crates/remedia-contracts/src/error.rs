//! Error types for the REMEDIA workspace.
//!
//! Matching itself never fails. Everything around it (loading a catalog,
//! validating its records, rendering output) returns `RemediaResult<T>`.

use thiserror::Error;

/// The unified error type for REMEDIA.
#[derive(Debug, Error)]
pub enum RemediaError {
    /// A catalog file or its settings could not be read or are invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A catalog record is missing a field the matcher depends on.
    #[error("invalid medication record '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },

    /// Two catalog records share a name (case-insensitive).
    ///
    /// Names identify records in results, so they must be unique.
    #[error("duplicate medication name in catalog: '{name}'")]
    DuplicateMedication { name: String },

    /// A result could not be rendered for output.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

/// Convenience alias used throughout the REMEDIA crates.
pub type RemediaResult<T> = Result<T, RemediaError>;
