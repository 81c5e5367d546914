//! Error types for the SymNMF pipeline.

use thiserror::Error;

/// Errors produced by the pipeline components.
///
/// The command-line driver collapses every variant into one uniform
/// message, but the variants stay distinguishable so callers and tests
/// can match on the failure kind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SymNmfError {
    /// Non-rectangular, non-numeric, or wrongly shaped input.
    #[error("invalid input format: {0}")]
    Format(String),

    /// Invalid configuration, e.g. a rank outside 1..n_samples.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A degenerate value that would force a division by zero.
    #[error("domain error: {0}")]
    Domain(String),

    /// A non-finite value appeared during factorization.
    #[error("numeric instability: {0}")]
    NumericInstability(String),

    /// The input file could not be read.
    #[error("io error: {0}")]
    Io(String),
}
