//! Check run statistics

use serde::{Deserialize, Serialize};

/// Counters for one checker run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckStats {
    /// Analysis roots (one per function)
    pub roots: usize,

    /// Call edges examined (one per call site and candidate)
    pub edges_examined: usize,

    /// Satisfiability checks issued
    pub solver_checks: usize,

    pub violations: usize,

    /// Call sites whose target name matched no function
    pub unresolved_targets: usize,

    /// Direct self-calls skipped
    pub self_calls_skipped: usize,

    /// Recursions cut by the on-path (callee, assumption set) guard
    pub pruned_by_guard: usize,

    /// Recursions cut by the path-length bound
    pub pruned_by_bound: usize,

    /// Longest path reached
    pub max_path_length: usize,
}

impl CheckStats {
    pub fn pruned(&self) -> usize {
        self.pruned_by_guard + self.pruned_by_bound
    }
}

impl std::fmt::Display for CheckStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} roots, {} edges, {} checks, {} violations, {} unresolved, {} pruned",
            self.roots,
            self.edges_examined,
            self.solver_checks,
            self.violations,
            self.unresolved_targets,
            self.pruned()
        )
    }
}
