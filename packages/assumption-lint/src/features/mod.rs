//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains (where it needs them):
//! - domain/         - Pure business logic
//! - ports/          - Interface definitions (traits)
//! - application/    - Use cases
//! - infrastructure/ - Parsers, walkers and solver backends

// Assumption mini-language: parser, block discovery, per-function table
pub mod assumptions;

// Conservative call-site walk over the structural expression tree
pub mod call_extraction;

// Incremental boolean SAT session (native, optional Z3)
pub mod smt;

// Interprocedural propagation and conflict detection
pub mod assumption_check;
