//! Error types for the expression engine.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the engine core.
///
/// Every expected domain failure is a value of this enum; the engine never
/// panics for bad input. Callers decide how to display a failure and whether
/// to roll anything back.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalcError {
    #[error("stack is empty")]
    StackEmpty,

    #[error("stack has less than two numbers")]
    StackHasLessThanTwoNumbers,

    #[error("division by zero")]
    DivisionByZero,

    #[error("cannot take the square root of a negative number")]
    InvalidNegativeSquareRoot,

    #[error("no result on stack")]
    NoResultOnStack,

    #[error("validation failed")]
    ValidationFailed,

    #[error("history is empty")]
    HistoryIsEmpty,

    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// Raised by the parser with every offending item, space-joined.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors produced by the history persistence collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access history at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode history: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("no history path configured and no default available")]
    NoPath,
}
