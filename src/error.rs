//! Error types for the variation engine.

use thiserror::Error;

/// Errors raised by the selection operators.
///
/// Configuration errors surface immediately and synchronously, before any
/// sampling or tree mutation happens. Depth-limit exclusion of offspring
/// is silent filtering and is never reported through this type.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// The double-tournament dominance constraint was violated: the
    /// dominant criterion's pool size must be at least the secondary
    /// criterion's draw count, so the second stage can sample that many
    /// distinct shortlist entries without replacement.
    ///
    /// `size_first` tells which criterion was dominant: size when
    /// `true`, fitness when `false`.
    #[error("invalid tournament configuration: dominant pool size {dominant} must be >= secondary draw count {secondary} (size dominant: {size_first})")]
    InvalidTournamentConfiguration {
        /// Pool size of the dominant (first-pass) criterion.
        dominant: usize,
        /// Draw count of the secondary (second-pass) criterion.
        secondary: usize,
        /// Whether size was the dominant criterion.
        size_first: bool,
    },
}

/// Result type alias for selection operations.
pub type SelectionResult<T> = Result<T, SelectionError>;
