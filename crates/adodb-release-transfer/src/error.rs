//! Transfer error types

use thiserror::Error;

/// Transfer-related errors
#[derive(Debug, Error)]
pub enum TransferError {
    /// Destination does not carry a host part
    #[error("invalid transfer destination '{0}': expected host:/path")]
    InvalidDestination(String),

    /// Command could not be started
    #[error("failed to run {command}: {source}")]
    CommandFailed {
        command: String,
        source: std::io::Error,
    },
}

/// Result type for transfer operations
pub type Result<T> = std::result::Result<T, TransferError>;
