/*
 * Finding Sink Port
 *
 * Receives violation reports as the checker produces them. The host decides
 * what to do with them (collect, print, forward to a linter framework).
 */

use crate::features::assumption_check::domain::ViolationReport;

/// Consumer of violation reports
pub trait FindingSink {
    fn report(&mut self, violation: ViolationReport);
}

/// Collecting sink
impl FindingSink for Vec<ViolationReport> {
    fn report(&mut self, violation: ViolationReport) {
        self.push(violation);
    }
}
