//! Error types for iso_rs operations.

use iso_core::CoreError;
use iso_io::IsoIoError;
use thiserror::Error;

/// Errors that can occur during surface generation and field construction.
#[derive(Error, Debug)]
pub enum IsoError {
    /// Storage or case-table error from iso_io.
    #[error("I/O error: {0}")]
    Io(#[from] IsoIoError),

    /// Error from iso_core.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// A surface was recolored with a table or field it was not generated from.
    #[error("surface does not match its generator: {message}")]
    SurfaceMismatch {
        /// Description of the mismatch.
        message: String,
    },
}

/// Result type alias for iso_rs operations.
pub type Result<T> = std::result::Result<T, IsoError>;
