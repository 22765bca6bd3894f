//! Error types for assumption-lint
//!
//! Provides unified error handling across the crate. Only conditions that
//! abort a whole run live here; malformed assumptions and unresolved call
//! targets are recovered locally by the features that meet them.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::smt::SolverError;

/// Main error type for assumption-lint operations
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The SAT capability is unavailable or failed. No partial results.
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The program model handed over by the host is inconsistent
    #[error("Program model error: {0}")]
    Model(String),

    /// Program model could not be deserialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Create a program model error
    pub fn model(msg: impl Into<String>) -> Self {
        AnalysisError::Model(msg.into())
    }
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
