//! Error types for framewindow.
//!
//! Every fallible operation in the crate reports one of these variants. Buffer
//! precondition violations are rejected before any state is touched.

use thiserror::Error;

/// The main error type for framewindow operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Buffer Errors ===
    /// A buffer was requested with a capacity of zero.
    #[error("window capacity must be at least 1")]
    ZeroCapacity,

    /// An element was requested from a buffer that holds nothing.
    #[error("cannot access {operation} of an empty buffer")]
    EmptyBuffer {
        /// The accessor that was called.
        operation: &'static str,
    },

    // === Frame Errors ===
    /// Descriptor bytes do not fill a `rows x cols` matrix.
    #[error(
        "descriptor matrix of {rows}x{cols} needs {} bytes, got {len}",
        expected_bytes(.rows, .cols)
    )]
    DescriptorShape {
        /// Number of descriptor rows.
        rows: usize,
        /// Bytes per descriptor row.
        cols: usize,
        /// Number of bytes supplied.
        len: usize,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// Byte count of a `rows x cols` matrix, spelled out for error messages.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn expected_bytes(rows: &usize, cols: &usize) -> String {
    rows.checked_mul(*cols)
        .map_or_else(|| "more than usize::MAX".to_string(), |n| n.to_string())
}

/// A specialized Result type for framewindow operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an empty-buffer error for the named accessor.
    #[must_use]
    pub fn empty_buffer(operation: &'static str) -> Self {
        Self::EmptyBuffer { operation }
    }

    /// Check if this error is an access to an empty buffer.
    #[must_use]
    pub fn is_empty_buffer(&self) -> bool {
        matches!(self, Self::EmptyBuffer { .. })
    }

    /// Check if this error came from loading or validating configuration.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigLoad(_) | Self::ConfigValidation { .. })
    }
}
