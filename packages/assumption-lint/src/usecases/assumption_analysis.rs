//! Assumption Analysis Service
//!
//! # Pipeline
//!
//! ```text
//! ProgramModel
//!     │ validate
//!     ▼
//! TableBuilder ──▶ AssumptionTable (doc terms, comment terms, call sites)
//!     │
//!     ▼
//! AssumptionChecker ⇄ SatSession (backend from config)
//!     │
//!     ▼
//! Vec<ViolationReport> ──▶ Diagnostic (W0001)
//! ```
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use assumption_lint::{AssumptionAnalysisService, CheckerConfig, ProgramModel};
//!
//! let model = ProgramModel::from_json(&json)?;
//! let service = AssumptionAnalysisService::new(CheckerConfig::default())?;
//! let result = service.analyze(&model)?;
//! for diagnostic in &result.diagnostics {
//!     println!("{}", diagnostic);
//! }
//! ```

use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::config::CheckerConfig;
use crate::errors::Result;
use crate::features::assumption_check::{
    AssumptionChecker, CheckStats, Diagnostic, ViolationReport,
};
use crate::features::assumptions::{MalformedAssumption, TableBuilder};
use crate::features::smt::{create_session, SatSession};
use crate::shared::models::ProgramModel;

/// Findings of one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub violations: Vec<ViolationReport>,

    /// One diagnostic per violation, same order
    pub diagnostics: Vec<Diagnostic>,

    /// Terms dropped while parsing declarations
    pub malformed: Vec<MalformedAssumption>,

    pub stats: CheckStats,
    pub duration: Duration,
}

impl AnalysisResult {
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// One-shot analysis entry point
#[derive(Debug, Clone)]
pub struct AssumptionAnalysisService {
    config: CheckerConfig,
}

impl AssumptionAnalysisService {
    /// Create a service; the configuration is validated up front
    pub fn new(config: CheckerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Analyze with the backend selected by the configuration
    pub fn analyze(&self, model: &ProgramModel) -> Result<AnalysisResult> {
        let session = create_session(self.config.solver, self.config.solver_timeout_ms)?;
        self.analyze_with_session(model, session)
    }

    /// Analyze with a caller-provided session
    pub fn analyze_with_session<S: SatSession>(
        &self,
        model: &ProgramModel,
        session: S,
    ) -> Result<AnalysisResult> {
        let start = Instant::now();
        model.validate()?;

        let table = TableBuilder::from_config(&self.config).build(model);
        if !table.malformed().is_empty() {
            warn!("{} malformed assumption(s) dropped", table.malformed().len());
        }

        let mut violations: Vec<ViolationReport> = Vec::new();
        let mut checker = AssumptionChecker::new(&table, session, &self.config);
        let stats = checker.run(&mut violations)?;

        let diagnostics = violations.iter().map(Diagnostic::from_violation).collect();
        let duration = start.elapsed();

        info!(
            "Analyzed {} functions in {:?}: {} violations, {} malformed",
            table.len(),
            duration,
            stats.violations,
            table.malformed().len()
        );

        Ok(AnalysisResult {
            violations,
            diagnostics,
            malformed: table.malformed().to_vec(),
            stats,
            duration,
        })
    }
}
