/*
 * Assumption Lint - Interprocedural Assumption Conflict Checker
 *
 * Function authors declare boolean preconditions with a small mini-language
 * (`assume: sorted, no-empty`) in documentation or in a comment line right
 * before a call. The checker walks the call graph from every function,
 * accumulates the active assumption set along each path and asks a SAT
 * session whether caller and callee claims can hold together.
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Consumed program model (functions, syntax tree, lines)
 * - features/    : Vertical slices (assumptions → call_extraction → smt → assumption_check)
 * - config/      : Checker configuration, presets, YAML schema
 * - usecases/    : One-shot analysis service
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::upper_case_acronyms)] // SAT naming

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models (program model consumed from the host)
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

/// Usecase layer (AssumptionAnalysisService)
pub mod usecases;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{CheckerConfig, Preset, SolverBackendKind};
pub use errors::{AnalysisError, Result};
pub use features::assumption_check::{
    AssumptionChecker, CheckStats, Diagnostic, FindingSink, ViolationReport,
};
pub use features::assumptions::{AssumptionLabel, AssumptionSet, AssumptionTable, AssumptionTerm};
pub use shared::models::{FunctionDef, LineNo, ProgramModel, SyntaxNode};
pub use usecases::{AnalysisResult, AssumptionAnalysisService};
