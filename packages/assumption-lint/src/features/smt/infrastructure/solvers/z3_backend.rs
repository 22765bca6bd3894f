//! Z3 SAT Backend
//!
//! Boolean session on top of Microsoft Z3. Each assumption label becomes a
//! Z3 `Bool` constant of the same name.
//!
//! Only available when compiled with `--features z3`.
//!
//! ## Installation
//!
//! ```bash
//! # Install Z3 library
//! apt-get install libz3-dev  # Linux
//! brew install z3            # macOS
//!
//! # Build with Z3 support
//! cargo build --release --features z3
//! ```

#![cfg(feature = "z3")]

use rustc_hash::FxHashMap;
use z3::ast::Bool;
use z3::{Params, SatResult, Solver};

use crate::features::assumptions::{AssumptionLabel, AssumptionTerm};
use crate::features::smt::domain::{SatVerdict, SolverError};
use crate::features::smt::ports::SatSession;

/// Z3-backed SAT session
pub struct Z3Session {
    solver: Solver,
    /// Label → Z3 constant
    vars: FxHashMap<AssumptionLabel, Bool>,
    timeout_ms: u32,
    _params: Params,
}

impl Z3Session {
    /// Create new Z3 session with default timeout (5000ms)
    pub fn new() -> Self {
        Self::with_timeout(5000)
    }

    /// Create new Z3 session with custom timeout
    pub fn with_timeout(timeout_ms: u32) -> Self {
        let solver = Solver::new();
        let mut params = Params::new();
        params.set_u32("timeout", timeout_ms);
        solver.set_params(&params);

        Self {
            solver,
            vars: FxHashMap::default(),
            timeout_ms,
            _params: params,
        }
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    fn var(&mut self, label: &AssumptionLabel) -> Bool {
        self.vars
            .entry(label.clone())
            .or_insert_with(|| Bool::new_const(label.as_str()))
            .clone()
    }
}

impl Default for Z3Session {
    fn default() -> Self {
        Self::new()
    }
}

impl SatSession for Z3Session {
    fn name(&self) -> &'static str {
        "z3"
    }

    fn assert_term(&mut self, term: &AssumptionTerm) -> Result<(), SolverError> {
        let var = self.var(term.label());
        let formula = if term.is_negated() { var.not() } else { var };
        self.solver.assert(&formula);
        Ok(())
    }

    fn check(&mut self) -> Result<SatVerdict, SolverError> {
        match self.solver.check() {
            SatResult::Sat => Ok(SatVerdict::Sat),
            SatResult::Unsat => Ok(SatVerdict::Unsat),
            SatResult::Unknown => Err(SolverError::unknown(
                self.solver
                    .get_reason_unknown()
                    .unwrap_or_else(|| "unknown".to_string()),
            )),
        }
    }

    fn reset(&mut self) {
        self.solver.reset();
    }
}
