//! SAT Infrastructure
//!
//! Solver backends and the factory selecting one from configuration.

pub mod solvers;

use tracing::debug;

use crate::config::SolverBackendKind;
use crate::features::smt::domain::SolverError;
use crate::features::smt::ports::SatSession;

/// Create the session for `kind`.
///
/// Requesting Z3 without the `z3` cargo feature is an error, never a silent
/// fallback to the native backend.
pub fn create_session(
    kind: SolverBackendKind,
    timeout_ms: u32,
) -> Result<Box<dyn SatSession>, SolverError> {
    match kind {
        SolverBackendKind::Native => {
            debug!("Using native SAT backend");
            Ok(Box::new(solvers::NativeSession::new()))
        }
        #[cfg(feature = "z3")]
        SolverBackendKind::Z3 => {
            debug!("Using Z3 SAT backend (timeout {}ms)", timeout_ms);
            Ok(Box::new(solvers::Z3Session::with_timeout(timeout_ms)))
        }
        #[cfg(not(feature = "z3"))]
        SolverBackendKind::Z3 => {
            let _ = timeout_ms;
            Err(SolverError::Unavailable(
                "z3 (rebuild with --features z3)".to_string(),
            ))
        }
    }
}
