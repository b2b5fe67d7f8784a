//! Error types and utilities.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
/// Represents an error that can occur while scanning.
pub enum Error {
    /// The file to scan does not exist.
    #[error("file '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// An I/O error occurred.
    #[error("i/o error {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized [Result] type for this crate's operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
