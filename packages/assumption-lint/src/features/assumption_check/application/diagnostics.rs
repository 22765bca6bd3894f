//! Lint-style rendering of violation reports

use serde::{Deserialize, Serialize};

use crate::features::assumption_check::domain::ViolationReport;
use crate::shared::models::LineNo;

/// Lint diagnostic for one violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub rule_id: String,
    pub symbol: String,
    pub checker: String,

    /// Qualified name of the function containing the call
    pub function: String,

    pub line: LineNo,
    pub message: String,
}

impl Diagnostic {
    pub const RULE_ID: &'static str = "W0001";
    pub const SYMBOL: &'static str = "assumptions-violated";
    pub const CHECKER: &'static str = "assumptions-checker";

    pub fn from_violation(violation: &ViolationReport) -> Self {
        // Caller terms then callee terms, as one list
        let assumptions: Vec<String> = violation
            .caller_assumptions
            .iter()
            .chain(violation.callee_assumptions.iter())
            .map(ToString::to_string)
            .collect();

        Self {
            rule_id: Self::RULE_ID.to_string(),
            symbol: Self::SYMBOL.to_string(),
            checker: Self::CHECKER.to_string(),
            function: violation.caller().to_string(),
            line: violation.line,
            message: format!(
                "Assumptions are violated when {}() calls to {}().\nAssumptions are: [{}]",
                violation.path_string(),
                violation.callee,
                assumptions.join(", ")
            ),
        }
    }
}

impl From<&ViolationReport> for Diagnostic {
    fn from(violation: &ViolationReport) -> Self {
        Self::from_violation(violation)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} ({}) {}",
            self.function, self.line, self.rule_id, self.symbol, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::assumptions::{AssumptionLabel, AssumptionSet, AssumptionTerm};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_message_template() {
        let x = AssumptionTerm::literal(AssumptionLabel::new("x").unwrap());
        let y = AssumptionTerm::literal(AssumptionLabel::new("y").unwrap());
        let violation = ViolationReport {
            path: vec!["m.main".to_string(), "m.f".to_string()],
            callee: "g".to_string(),
            callee_qualified_name: "m.g".to_string(),
            line: 12,
            caller_assumptions: AssumptionSet::from_terms([&x, &y]),
            callee_assumptions: AssumptionSet::from_terms([&x.negate()]),
            offending: x.negate(),
        };

        let diagnostic = Diagnostic::from_violation(&violation);
        assert_eq!(diagnostic.rule_id, "W0001");
        assert_eq!(diagnostic.symbol, "assumptions-violated");
        assert_eq!(diagnostic.checker, "assumptions-checker");
        assert_eq!(diagnostic.function, "m.f");
        assert_eq!(diagnostic.line, 12);
        assert_eq!(
            diagnostic.message,
            "Assumptions are violated when m.main->m.f() calls to g().\nAssumptions are: [x, y, no-x]"
        );
    }
}
