//! Common error types for CGP

use thiserror::Error;

/// Common result type for CGP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across CGP services
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal failure (e.g. a global subscriber already installed)
    #[error("Internal error: {0}")]
    Internal(String),
}
