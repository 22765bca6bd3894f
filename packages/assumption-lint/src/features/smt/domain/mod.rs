//! SAT Domain Models

mod error;
mod verdict;

pub use error::SolverError;
pub use verdict::SatVerdict;
