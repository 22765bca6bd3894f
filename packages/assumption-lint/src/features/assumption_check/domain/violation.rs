/*
 * Violation Report
 *
 * Created once per detected conflict, handed to the finding sink and never
 * mutated afterwards.
 */

use serde::{Deserialize, Serialize};

use crate::features::assumptions::{AssumptionSet, AssumptionTerm};
use crate::shared::models::LineNo;

/// Contradictory caller and callee assumptions on one call edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationReport {
    /// Qualified names from the analysis root to the violating caller
    pub path: Vec<String>,

    /// Callee's simple name
    pub callee: String,

    /// Qualified name of the candidate that conflicted
    pub callee_qualified_name: String,

    /// Line of the call in the caller's body
    pub line: LineNo,

    /// Caller-side set active at the call (comment terms included)
    pub caller_assumptions: AssumptionSet,

    /// Callee's doc-declared set
    pub callee_assumptions: AssumptionSet,

    /// The callee term whose assertion made the session UNSAT
    pub offending: AssumptionTerm,
}

impl ViolationReport {
    /// Qualified name of the function containing the call
    pub fn caller(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// Root of the analysis path
    pub fn root(&self) -> &str {
        self.path.first().map(String::as_str).unwrap_or_default()
    }

    /// Path rendered as `a->b->c`
    pub fn path_string(&self) -> String {
        self.path.join("->")
    }
}
