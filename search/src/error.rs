//! Typed solve errors.
//!
//! `SolveError` represents pre-flight failures only. Search exhaustion is
//! not an error — it is the normal terminal value
//! [`Outcome::Unsolvable`](crate::solve::Outcome::Unsolvable), which
//! callers must handle explicitly.

use isotope_kernel::state::StateError;

/// Typed failure for pre-flight solve validation.
///
/// Returned before the search loop starts; no search work is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The initial state failed its structural preconditions.
    Precondition(StateError),
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Precondition(inner) => write!(f, "invalid initial state: {inner}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Precondition(inner) => Some(inner),
        }
    }
}

impl From<StateError> for SolveError {
    fn from(inner: StateError) -> Self {
        Self::Precondition(inner)
    }
}
