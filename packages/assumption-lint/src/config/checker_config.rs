//! Checker configuration
//!
//! Builder API plus YAML loading. Field-level overrides are applied on top
//! of a preset; the result is validated before use.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigFileV1, ConfigOverrides, SUPPORTED_VERSIONS};
use super::preset::Preset;

/// Solver backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverBackendKind {
    /// In-house unit-clause session
    #[default]
    Native,

    /// Z3 (requires the `z3` cargo feature)
    Z3,
}

impl SolverBackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Z3 => "z3",
        }
    }
}

impl FromStr for SolverBackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "z3" => Ok(Self::Z3),
            _ => Err(ConfigError::UnknownSolver(s.to_string())),
        }
    }
}

impl std::fmt::Display for SolverBackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Interprocedural checker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Preset this configuration started from
    pub preset: Preset,

    /// Enable comment-scoped assumptions
    pub comment_assumptions: bool,

    /// Comment marker for comment-line discovery
    pub comment_prefix: String,

    /// Maximum number of functions on one path (termination bound)
    pub max_path_length: usize,

    /// Prune an edge when (callee, assumption set) is already on the path
    pub cycle_guard: bool,

    /// SAT backend
    pub solver: SolverBackendKind,

    /// Timeout per check for backends that support one (milliseconds)
    pub solver_timeout_ms: u32,
}

impl CheckerConfig {
    pub const MAX_PATH_LENGTH_RANGE: (usize, usize) = (1, 4096);

    /// Complete configuration for `preset`
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            comment_assumptions: preset.comment_assumptions(),
            comment_prefix: "#".to_string(),
            max_path_length: 64,
            cycle_guard: true,
            solver: SolverBackendKind::Native,
            solver_timeout_ms: 5000,
        }
    }

    pub fn comment_assumptions(mut self, enabled: bool) -> Self {
        self.comment_assumptions = enabled;
        self
    }

    pub fn comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    pub fn max_path_length(mut self, max: usize) -> Self {
        self.max_path_length = max;
        self
    }

    pub fn cycle_guard(mut self, enabled: bool) -> Self {
        self.cycle_guard = enabled;
        self
    }

    pub fn solver(mut self, solver: SolverBackendKind) -> Self {
        self.solver = solver;
        self
    }

    pub fn solver_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.solver_timeout_ms = timeout_ms;
        self
    }

    /// Apply YAML overrides
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(v) = overrides.comment_assumptions {
            self.comment_assumptions = v;
        }
        if let Some(v) = &overrides.comment_prefix {
            self.comment_prefix = v.clone();
        }
        if let Some(v) = overrides.max_path_length {
            self.max_path_length = v;
        }
        if let Some(v) = overrides.cycle_guard {
            self.cycle_guard = v;
        }
        if let Some(v) = overrides.solver {
            self.solver = v;
        }
        if let Some(v) = overrides.solver_timeout_ms {
            self.solver_timeout_ms = v;
        }
        self
    }

    /// Range checks and consistency
    pub fn validate(&self) -> ConfigResult<()> {
        let (min, max) = Self::MAX_PATH_LENGTH_RANGE;
        if !(min..=max).contains(&self.max_path_length) {
            return Err(ConfigError::range("max_path_length", self.max_path_length, min, max));
        }
        if self.comment_assumptions && self.comment_prefix.trim().is_empty() {
            return Err(ConfigError::invalid(
                "comment_prefix",
                "must be non-empty when comment_assumptions is enabled",
            ));
        }
        if self.solver == SolverBackendKind::Z3 && self.solver_timeout_ms == 0 {
            return Err(ConfigError::range("solver_timeout_ms", 0, 1, u32::MAX));
        }
        Ok(())
    }

    /// Load from YAML text (schema v1)
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(yaml)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset: Preset = file.preset.parse()?;

        let mut config = Self::preset(preset);
        if let Some(overrides) = &file.overrides {
            config = config.with_overrides(overrides);
        }
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file (schema v1)
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Export as YAML (schema v1), every field as an explicit override
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            preset: self.preset.as_str().to_string(),
            overrides: Some(ConfigOverrides {
                comment_assumptions: Some(self.comment_assumptions),
                comment_prefix: Some(self.comment_prefix.clone()),
                max_path_length: Some(self.max_path_length),
                cycle_guard: Some(self.cycle_guard),
                solver: Some(self.solver),
                solver_timeout_ms: Some(self.solver_timeout_ms),
            }),
        };
        Ok(serde_yaml::to_string(&file)?)
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}
