//! Call site model

use serde::{Deserialize, Serialize};

use crate::shared::models::LineNo;

/// One call expression inside a function body
///
/// The target is kept as written; it is matched against function simple
/// names by equality, never resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallSite {
    /// Qualified name of the enclosing function
    pub caller: String,

    /// Callee's textual name (unresolved)
    pub target_name: String,

    /// Source line of the call
    pub line: LineNo,
}

impl CallSite {
    pub fn new(caller: impl Into<String>, target_name: impl Into<String>, line: LineNo) -> Self {
        Self {
            caller: caller.into(),
            target_name: target_name.into(),
            line,
        }
    }
}
