//! SAT Session Module
//!
//! Incremental boolean satisfiability session used by the interprocedural
//! checker. Only the SAT/UNSAT verdict is needed, never a model.
//!
//! ## Architecture
//!
//! ```text
//! smt
//! ├── domain/               # SatVerdict, SolverError
//! ├── ports/                # SatSession trait (assert / check / reset)
//! └── infrastructure/
//!     ├── solvers/native    # In-house unit-clause session (default)
//!     └── solvers/z3        # Z3 backend (optional, feature-gated)
//! ```
//!
//! ## Usage
//!
//! ```text
//! let mut session = create_session(SolverBackendKind::Native, 5000)?;
//! session.reset();
//! session.assert_term(&sorted)?;
//! session.assert_term(&sorted.negate())?;
//! assert_eq!(session.check()?, SatVerdict::Unsat);
//! ```

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Domain models
pub use domain::{SatVerdict, SolverError};

// Port
pub use ports::SatSession;

// Backends
pub use infrastructure::create_session;
pub use infrastructure::solvers::NativeSession;
#[cfg(feature = "z3")]
pub use infrastructure::solvers::Z3Session;
