//! Errors returned by list operations.

use thiserror::Error;

/// Error returned when a list operation cannot be applied.
///
/// The list is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The requested 1-based position is outside the valid range for the
    /// current length.
    #[error("no such position {position} in list of length {len}")]
    InvalidPosition {
        /// Position that was requested.
        position: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
    /// Removal was requested from a list with no elements.
    #[error("no such element: list is empty")]
    EmptyList,
}
