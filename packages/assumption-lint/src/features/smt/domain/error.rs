//! Solver errors
//!
//! Every solver error is fatal to the whole analysis run: no partial results
//! are produced without a working solver.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Requested backend is not compiled in or cannot be started
    #[error("solver backend '{0}' is unavailable")]
    Unavailable(String),

    /// Backend could not decide (timeout, resource limit)
    #[error("solver returned unknown: {reason}")]
    Unknown { reason: String },
}

impl SolverError {
    pub fn unknown(reason: impl Into<String>) -> Self {
        Self::Unknown {
            reason: reason.into(),
        }
    }
}
