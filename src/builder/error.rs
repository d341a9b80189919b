//! Build errors for the calculator builder.

use crate::core::Violation;
use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state is invalid ({} violations): {}", .0.len(), describe(.0))]
    InvalidInitialState(Vec<Violation>),

    #[error("Tape capacity must be at least 1. Use .record_tape(false) to disable the tape")]
    ZeroTapeCapacity,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
