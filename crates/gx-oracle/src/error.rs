//! Error types for the divination engine and its session.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors surfaced to callers of the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// Missing or unparseable date, unknown question type, or a malformed
    /// command argument. Raised before any computation starts.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The almanac query failed, so no reading was produced.
    #[error("almanac unavailable: {0}")]
    AlmanacUnavailable(#[from] gx_almanac::AlmanacError),

    /// The same question was already asked in this session.
    #[error("初筮告 再三渎 渎则不告 （同一件事只能问一次哦）: \"{0}\"")]
    RepeatedQuestion(String),

    /// Unknown session command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
