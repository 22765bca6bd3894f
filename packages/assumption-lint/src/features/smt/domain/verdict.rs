//! Satisfiability verdict

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict over all clauses asserted since the last reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SatVerdict {
    /// Some boolean assignment satisfies every clause
    Sat,

    /// No satisfying assignment (contradiction)
    Unsat,
}

impl SatVerdict {
    pub fn is_sat(&self) -> bool {
        matches!(self, Self::Sat)
    }

    pub fn is_unsat(&self) -> bool {
        matches!(self, Self::Unsat)
    }
}

impl fmt::Display for SatVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sat => write!(f, "sat"),
            Self::Unsat => write!(f, "unsat"),
        }
    }
}
