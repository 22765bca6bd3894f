//! Configuration I/O schema (YAML)
//!
//! Defines YAML schema types. Loading lives in checker_config.rs.

use serde::{Deserialize, Serialize};

use super::checker_config::SolverBackendKind;

/// Schema versions this crate can read
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1). Optional here so that a missing
    /// field gets a dedicated error.
    #[serde(default)]
    pub version: Option<u32>,

    /// Base preset
    pub preset: String,

    /// Fine-grained overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ConfigOverrides>,
}

/// Configuration overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_assumptions: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_path_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_guard: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solver: Option<SolverBackendKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solver_timeout_ms: Option<u32>,
}
