//! SAT Solver Implementations
//!
//! Provides solver backends behind the [`SatSession`](crate::features::smt::SatSession) port:
//!
//! 1. **NativeSession**: In-house session over unit clauses (default)
//! 2. **Z3Session**: Z3 boolean solver (optional, feature-gated)

pub mod native;

#[cfg(feature = "z3")]
pub mod z3_backend;

pub use native::NativeSession;

#[cfg(feature = "z3")]
pub use z3_backend::Z3Session;
