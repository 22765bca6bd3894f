//! Native Literal Session
//!
//! The checker only ever asserts unit clauses, so a conjunction of literals
//! is UNSAT exactly when some label is asserted with both polarities. The
//! session records one polarity per label and latches the first clash.
//!
//! ## Example
//!
//! ```text
//! assert sorted      → sorted = true
//! assert no-empty    → empty  = false
//! assert no-sorted   ← clash with sorted = true
//!
//! Result: UNSAT
//! ```

use rustc_hash::FxHashMap;

use crate::features::assumptions::{AssumptionLabel, AssumptionTerm};
use crate::features::smt::domain::{SatVerdict, SolverError};
use crate::features::smt::ports::SatSession;

/// In-house SAT session over unit clauses
#[derive(Debug, Default)]
pub struct NativeSession {
    /// Label → asserted polarity
    assignment: FxHashMap<AssumptionLabel, bool>,

    /// Some label was asserted both ways since the last reset
    conflict: bool,
}

impl NativeSession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SatSession for NativeSession {
    fn name(&self) -> &'static str {
        "native"
    }

    fn assert_term(&mut self, term: &AssumptionTerm) -> Result<(), SolverError> {
        let value = !term.is_negated();
        let previous = *self
            .assignment
            .entry(term.label().clone())
            .or_insert(value);
        if previous != value {
            self.conflict = true;
        }
        Ok(())
    }

    fn check(&mut self) -> Result<SatVerdict, SolverError> {
        Ok(if self.conflict {
            SatVerdict::Unsat
        } else {
            SatVerdict::Sat
        })
    }

    fn reset(&mut self) {
        self.assignment.clear();
        self.conflict = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(name: &str) -> AssumptionTerm {
        AssumptionTerm::literal(AssumptionLabel::new(name).unwrap())
    }

    #[test]
    fn test_empty_session_is_sat() {
        let mut s = NativeSession::new();
        assert_eq!(s.check().unwrap(), SatVerdict::Sat);
    }

    #[test]
    fn test_term_and_negation_unsat() {
        let mut s = NativeSession::new();
        s.assert_term(&lit("x")).unwrap();
        assert_eq!(s.check().unwrap(), SatVerdict::Sat);

        s.assert_term(&lit("x").negate()).unwrap();
        assert_eq!(s.check().unwrap(), SatVerdict::Unsat);
    }

    #[test]
    fn test_repeated_term_sat() {
        let mut s = NativeSession::new();
        s.assert_all(&[lit("x").negate(), lit("x").negate()]).unwrap();
        assert!(s.check().unwrap().is_sat());
    }

    #[test]
    fn test_independent_terms_sat() {
        let mut s = NativeSession::new();
        s.assert_all(&[lit("x"), lit("y"), lit("z").negate()]).unwrap();
        assert!(s.check().unwrap().is_sat());
    }

    #[test]
    fn test_conflict_latches_until_reset() {
        let mut s = NativeSession::new();
        s.assert_all(&[lit("x"), lit("x").negate()]).unwrap();
        assert!(s.check().unwrap().is_unsat());

        // Later agreeing terms do not clear an earlier clash
        s.assert_term(&lit("y")).unwrap();
        assert!(s.check().unwrap().is_unsat());

        s.reset();
        s.assert_term(&lit("x").negate()).unwrap();
        assert!(s.check().unwrap().is_sat());
    }
}
