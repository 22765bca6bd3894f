//! Custom assertions for test verification

use assumption_lint::{AssumptionTerm, ViolationReport};

/// Assert that no violation was reported
pub fn assert_no_violations(violations: &[ViolationReport]) {
    assert!(
        violations.is_empty(),
        "Expected no violations, got: {:?}",
        violations
            .iter()
            .map(|v| format!("{} -> {} ({})", v.path_string(), v.callee, v.offending))
            .collect::<Vec<_>>()
    );
}

/// Assert the number of violations
pub fn assert_violation_count(violations: &[ViolationReport], expected: usize) {
    assert_eq!(
        violations.len(),
        expected,
        "Expected {expected} violations, got {}: {:?}",
        violations.len(),
        violations.iter().map(|v| v.path_string()).collect::<Vec<_>>()
    );
}

/// Find the violation whose path renders as `path` (`a->b`) and whose
/// callee is `callee`
pub fn find_violation<'a>(
    violations: &'a [ViolationReport],
    path: &str,
    callee: &str,
) -> &'a ViolationReport {
    violations
        .iter()
        .find(|v| v.path_string() == path && v.callee == callee)
        .unwrap_or_else(|| {
            panic!(
                "No violation {path} -> {callee} in {:?}",
                violations
                    .iter()
                    .map(|v| format!("{} -> {}", v.path_string(), v.callee))
                    .collect::<Vec<_>>()
            )
        })
}

/// Assert the offending term of a violation
pub fn assert_offending(violation: &ViolationReport, expected: &AssumptionTerm) {
    assert_eq!(
        &violation.offending, expected,
        "Expected offending term {expected}, got {}",
        violation.offending
    );
}
