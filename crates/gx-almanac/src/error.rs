use chrono::NaiveDate;
use thiserror::Error;

/// Result type for almanac queries.
pub type AlmanacResult<T> = Result<T, AlmanacError>;

/// Errors an almanac provider can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlmanacError {
    /// The date lies outside the range covered by the lunar tables.
    #[error("date {0} is outside the supported range 1900-01-31 to 2100-12-31")]
    OutOfRange(NaiveDate),

    /// A provider backed by some other source could not answer.
    #[error("almanac source unavailable: {0}")]
    Unavailable(String),
}
