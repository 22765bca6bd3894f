/*
 * SAT Ports
 *
 * The checker owns exactly one session for a whole run and threads it
 * through the traversal: reset before every edge, never interleaved.
 */

use super::domain::{SatVerdict, SolverError};
use crate::features::assumptions::AssumptionTerm;

/// Incremental boolean SAT session
pub trait SatSession {
    /// Name of this backend
    fn name(&self) -> &'static str;

    /// Add `term` as a unit clause to the current session
    fn assert_term(&mut self, term: &AssumptionTerm) -> Result<(), SolverError>;

    /// SAT or UNSAT over everything asserted since the last `reset`
    fn check(&mut self) -> Result<SatVerdict, SolverError>;

    /// Clear the session
    fn reset(&mut self);

    /// Assert every term of a conjunction
    fn assert_all<'a>(
        &mut self,
        terms: impl IntoIterator<Item = &'a AssumptionTerm>,
    ) -> Result<(), SolverError>
    where
        Self: Sized,
    {
        for term in terms {
            self.assert_term(term)?;
        }
        Ok(())
    }
}

impl<S: SatSession + ?Sized> SatSession for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn assert_term(&mut self, term: &AssumptionTerm) -> Result<(), SolverError> {
        (**self).assert_term(term)
    }

    fn check(&mut self) -> Result<SatVerdict, SolverError> {
        (**self).check()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}
