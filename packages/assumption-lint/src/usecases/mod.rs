//! Usecase Layer - one-shot assumption analysis
//!
//! Program model in, findings out. Intended for linter front-ends that have
//! already parsed a module and serialized it into a [`ProgramModel`].
//!
//! [`ProgramModel`]: crate::shared::models::ProgramModel

pub mod assumption_analysis;

// Re-export main API
pub use assumption_analysis::{AnalysisResult, AssumptionAnalysisService};
