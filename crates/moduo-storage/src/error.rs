//! Storage error types.

use thiserror::Error;

/// Errors from the key-value persistence layer.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem error.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
