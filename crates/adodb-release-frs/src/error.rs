//! Release API error types

use thiserror::Error;

/// Release API errors
#[derive(Debug, Error)]
pub enum FrsError {
    /// API key missing or unreadable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Credentials rejected by the API
    #[error("access denied - check API key")]
    Unauthorized,

    /// Any other unsuccessful API response
    #[error("SourceForge API call failed (status {status}) - check API key")]
    ApiFailure { status: u16 },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for Release API operations
pub type Result<T> = std::result::Result<T, FrsError>;
