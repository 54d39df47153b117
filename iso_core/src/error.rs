//! Error types for iso_core operations.
//!
//! Provides a simple error enum with no external dependencies for no_std compatibility.

use core::fmt;

/// Error types that can occur during iso_core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A raw plane selector was not one of the three known codes.
    InvalidPlane {
        /// The rejected code.
        raw: u8,
    },
    /// A raw comparator code was not one of the five known codes.
    InvalidComparator {
        /// The rejected code.
        raw: u8,
    },
    /// A corner index outside 0..8 was requested.
    InvalidCorner {
        /// The rejected index.
        index: usize,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidPlane { raw } => {
                write!(f, "invalid plane selector {} (expected 0, 1 or 2)", raw)
            }
            CoreError::InvalidComparator { raw } => {
                write!(f, "invalid comparator code {} (expected 0 to 4)", raw)
            }
            CoreError::InvalidCorner { index } => {
                write!(f, "corner index {} is outside 0..8", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}
