//! Error type for the compression pipeline.
//!
//! Mirrors the teacher's `Lz4FError` in `frame/types.rs`: named variants,
//! a manual `Display` impl instead of a `thiserror` derive, and a plain
//! `std::error::Error` impl so the type composes with `anyhow` at the CLI
//! boundary.

use std::fmt;

/// Failures `compress` can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressError {
    /// The caller's output buffer is too small to hold the compressed
    /// stream, even in the worst case computed by
    /// [`crate::compress::max_compressed_size`].
    OutputTooSmall,
    /// A scratch allocation needed by the pipeline failed.
    AllocationFailed,
}

impl CompressError {
    /// Short machine-readable name, matching the teacher's
    /// `Lz4FError::error_name` convention.
    pub fn error_name(&self) -> &'static str {
        match self {
            CompressError::OutputTooSmall => "OutputTooSmall",
            CompressError::AllocationFailed => "AllocationFailed",
        }
    }
}

impl fmt::Display for CompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressError::OutputTooSmall => {
                write!(f, "output buffer too small for compressed data")
            }
            CompressError::AllocationFailed => write!(f, "scratch buffer allocation failed"),
        }
    }
}

impl std::error::Error for CompressError {}
