//! Configuration System
//!
//! Two levels, following progressive disclosure:
//! - Level 1: Preset - one-liner choosing the engine variant
//! - Level 2: YAML / builder overrides - fine-grained control
//!
//! # Examples
//!
//! ```rust,ignore
//! use assumption_lint::config::{CheckerConfig, Preset};
//!
//! // Level 1: doc assumptions only
//! let config = CheckerConfig::preset(Preset::Docstring);
//!
//! // Level 2: override specific settings
//! let config = CheckerConfig::preset(Preset::Module)
//!     .max_path_length(32)
//!     .comment_prefix("//");
//!
//! // Level 2: YAML
//! let config = CheckerConfig::from_yaml_file("assumptions.yaml")?;
//! ```

pub mod checker_config;
pub mod error;
pub mod io;
pub mod preset;

// Re-exports
pub use checker_config::{CheckerConfig, SolverBackendKind};
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigFileV1, ConfigOverrides};
pub use preset::Preset;
