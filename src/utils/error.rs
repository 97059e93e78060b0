//! Error handling for plancost
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for plancost
pub type Result<T> = std::result::Result<T, PlancostError>;

/// Main error type for plancost
#[derive(Error, Debug)]
pub enum PlancostError {
    /// Catalog validation errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlancostError {
    /// Create a catalog validation error
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog(message.into())
    }
}
