//! Preset configurations
//!
//! Presets select one of the two engine variants.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ConfigError;

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Per-function variant: doc-declared assumptions only
    Docstring,

    /// Whole-module variant: doc assumptions plus comment-scoped ones
    #[default]
    Module,
}

impl Preset {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Docstring => "docstring",
            Self::Module => "module",
        }
    }

    /// Whether this preset enables comment-scoped assumptions
    pub fn comment_assumptions(&self) -> bool {
        matches!(self, Self::Module)
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    /// Case-insensitive preset name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "docstring" => Ok(Self::Docstring),
            "module" => Ok(Self::Module),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parsing() {
        assert_eq!("docstring".parse::<Preset>().unwrap(), Preset::Docstring);
        assert_eq!("MODULE".parse::<Preset>().unwrap(), Preset::Module);
        assert!(matches!(
            "thorough".parse::<Preset>(),
            Err(ConfigError::UnknownPreset(name)) if name == "thorough"
        ));
    }

    #[test]
    fn test_preset_display() {
        assert_eq!(Preset::Docstring.to_string(), "docstring");
        assert_eq!(Preset::Module.to_string(), "module");
    }

    #[test]
    fn test_display_parses_back() {
        for preset in [Preset::Docstring, Preset::Module] {
            assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        }
    }

    #[test]
    fn test_default_preset() {
        assert_eq!(Preset::default(), Preset::Module);
        assert!(Preset::Module.comment_assumptions());
        assert!(!Preset::Docstring.comment_assumptions());
    }
}
