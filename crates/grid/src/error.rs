//! Error types for the gridstate-grid crate.

/// Error type for all fallible operations in the gridstate-grid crate.
///
/// Covers malformed binary state strings and invalid grid configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Returned when the state string is empty.
    #[error("binary state is empty")]
    EmptyState,

    /// Returned for the first character that is not `'0'` or `'1'`.
    #[error("invalid binary digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Zero-based character position in the state string.
        position: usize,
    },

    /// Returned when the decoded value does not fit in a `u128`.
    #[error("binary state of length {len} exceeds 128 significant bits")]
    Overflow {
        /// Length of the state string.
        len: usize,
    },

    /// Returned when the grid has no columns.
    #[error("invalid column count: {columns} (must be > 0)")]
    InvalidColumns {
        /// The column count that was provided.
        columns: usize,
    },

    /// Returned when a row bound is set to zero.
    #[error("invalid row count: {rows} (must be > 0)")]
    InvalidRows {
        /// The row count that was provided.
        rows: usize,
    },
}
