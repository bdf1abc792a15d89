//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
///
/// All variants are deterministic precondition violations — none are
/// transient or retryable. Callers legitimately need to tell "not yet set
/// up" apart from "ran out of room", so the variants are never merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// `init` was called on an arena that already owns a buffer.
    AlreadyInitialized,
    /// The operation requires an initialized arena.
    NotInitialized,
    /// `init` was called with a zero capacity.
    InvalidCapacity,
    /// The buffer has too little room left for the request.
    OutOfCapacity {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes left between the cursor and the end of the
        /// buffer, before any alignment rounding.
        remaining: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized => {
                write!(f, "arena is already initialized, release it first")
            }
            Self::NotInitialized => write!(f, "arena is not initialized"),
            Self::InvalidCapacity => write!(f, "arena capacity must be bigger than 0"),
            Self::OutOfCapacity {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "arena out of capacity: requested {requested} bytes, {remaining} bytes remaining"
                )
            }
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_render_distinctly() {
        let all = [
            ArenaError::AlreadyInitialized,
            ArenaError::NotInitialized,
            ArenaError::InvalidCapacity,
            ArenaError::OutOfCapacity {
                requested: 8,
                remaining: 4,
            },
        ];
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                if i != j {
                    assert_ne!(a.to_string(), b.to_string());
                }
            }
        }
    }

    #[test]
    fn out_of_capacity_names_both_sizes() {
        let err = ArenaError::OutOfCapacity {
            requested: 17,
            remaining: 4,
        };
        let text = err.to_string();
        assert!(text.contains("17"));
        assert!(text.contains('4'));
    }
}
