/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when building core values from untrusted numbers or names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A trigram index outside `1..=8`.
    #[error("invalid trigram index: {0} (expected 1-8)")]
    InvalidTrigram(u8),

    /// A line position outside `1..=3` within a trigram.
    #[error("invalid line position: {0} (expected 1-3)")]
    InvalidLine(u8),

    /// A trigram name that matches none of the eight trigrams.
    #[error("unknown trigram: \"{0}\"")]
    UnknownTrigramName(String),
}
