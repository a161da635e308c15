//! Errors reported by the color engine.

use thiserror::Error;

/// Everything that can go wrong when interpreting or transforming a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input does not have the textual or numeric shape of a color.
    #[error("invalid color format: {0}")]
    InvalidFormat(String),

    /// The input is well formed but semantically invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The classifier could not interpret the input as a color.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
