use std::error::Error;
use std::fmt;

/// Failures reported by list operations.
///
/// Absence is not an error: `find` answers `None` and `delete` answers
/// `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// `pop_front` was called on a list with no elements.
    EmptyContainer,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::EmptyContainer => write!(f, "pop from an empty list"),
        }
    }
}

impl Error for ListError {}
