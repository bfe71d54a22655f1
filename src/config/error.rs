//! Configuration error types.

use crate::core::Phase;
use thiserror::Error;

/// A single problem found while validating a [`super::ReducerConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Base action type name is empty")]
    EmptyBaseName,

    #[error("Action type for the {phase} phase is empty")]
    EmptyTypeIdentifier { phase: Phase },

    #[error("Custom suffixes cannot be combined with final type mode")]
    SuffixesWithFinalType,

    #[error("Initial state must be a JSON object, found {found}")]
    InitialStateNotObject { found: String },
}

/// Errors that can occur when loading a reducer configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration was not valid JSON for the expected shape
    #[error("Failed to parse reducer configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but failed validation
    #[error("Invalid reducer configuration: {}", join(.violations))]
    Invalid { violations: Vec<ConfigViolation> },
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
