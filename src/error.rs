//! Error types.
//!
//! A dataset that comes out wrongly sorted is not an error: it is recorded as
//! a failed result. Errors here are the conditions that stop a run.

use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// The algorithm selector names nothing in the registry
    #[error("unknown algorithm '{name}' (available: {available})")]
    UnknownAlgorithm { name: String, available: String },

    /// An algorithm broke the length invariant; this is a defect in the
    /// algorithm, not a dataset failure
    #[error("{algorithm} returned {actual} elements for dataset '{dataset}', expected {expected}")]
    InvariantViolation {
        algorithm: &'static str,
        dataset: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An algorithm kept the length but returned different values
    #[error("{algorithm} changed the elements of dataset '{dataset}'")]
    MultisetChanged {
        algorithm: &'static str,
        dataset: &'static str,
    },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl HarnessError {
    /// Process exit status for this error: 2 for configuration mistakes,
    /// 1 for everything else
    pub fn exit_code(&self) -> u8 {
        match self {
            HarnessError::UnknownAlgorithm { .. } => 2,
            _ => 1,
        }
    }
}

/// Failure to read an ad-hoc integer list such as `"7,1,4"`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("array literal is empty")]
    Empty,

    #[error("invalid integer '{token}': {source}")]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },
}
