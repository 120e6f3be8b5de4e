//! Error types for configuration and world loading.
//!
//! The permeability resolver and the sealed-region search never fail; only
//! reading files from outside the process does.

use thiserror::Error;

/// Result type alias using GuardError.
pub type Result<T> = std::result::Result<T, GuardError>;

/// Main error type for breakguard.
#[derive(Error, Debug)]
pub enum GuardError {
    /// Failed to parse JSON data.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A block list parsed but describes an impossible world.
    #[error("Invalid block list: {0}")]
    InvalidBlockList(String),
}
