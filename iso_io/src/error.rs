//! Error types for iso_io operations.
//!
//! Covers field construction, plane population and case-table loading.

use iso_core::CoreError;
use thiserror::Error;

/// Errors that can occur during iso_io operations.
#[derive(Error, Debug)]
pub enum IsoIoError {
    /// A plane index was outside the independent axis.
    #[error("plane index {index} is outside the independent axis of length {len}")]
    PlaneIndexOutOfRange {
        /// The rejected plane index.
        index: usize,
        /// Length of the independent axis.
        len: usize,
    },

    /// An explicit offset array did not match the independent axis length.
    #[error("{axis} offset array has {got} entries but the independent axis has {expected}")]
    OffsetLengthMismatch {
        /// `"major"` or `"minor"`.
        axis: &'static str,
        /// Independent axis length.
        expected: usize,
        /// Length supplied.
        got: usize,
    },

    /// A case-table line could not be parsed or violated an entry invariant.
    #[error("case table line {line}: {message}")]
    TableFormat {
        /// 1-based line number (0 when the entry did not come from text).
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// A configuration was registered twice.
    #[error("duplicate case table entry for configuration {config:#010x}")]
    DuplicateEntry {
        /// The repeated configuration.
        config: u32,
    },

    /// Error from iso_core.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// I/O error while reading or writing a table file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IsoIoError {
    pub(crate) fn table(line: usize, message: impl Into<String>) -> Self {
        IsoIoError::TableFormat {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for iso_io operations.
pub type Result<T> = std::result::Result<T, IsoIoError>;
