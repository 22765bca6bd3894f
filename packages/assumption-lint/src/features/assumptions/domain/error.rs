//! Assumption errors
//!
//! Malformed terms are non-fatal: the term is dropped, the rest of its block
//! is still parsed and the drop is recorded for the host.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::models::LineNo;

/// Error raised while parsing a single term
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssumptionError {
    /// Term does not reduce to a valid symbol name after prefix stripping
    #[error("malformed assumption '{text}': {reason}")]
    Malformed { text: String, reason: String },
}

impl AssumptionError {
    pub fn malformed(text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            text: text.into(),
            reason: reason.into(),
        }
    }
}

/// Where a declaration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssumptionSource {
    /// Function documentation
    Doc,

    /// Comment line inside the function body
    Comment { line: LineNo },
}

/// Dropped term, reported back to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalformedAssumption {
    /// Qualified name of the declaring function
    pub function: String,

    pub source: AssumptionSource,

    /// Offending term text as written
    pub text: String,

    pub reason: String,
}

impl MalformedAssumption {
    pub fn from_error(function: impl Into<String>, source: AssumptionSource, error: AssumptionError) -> Self {
        let AssumptionError::Malformed { text, reason } = error;
        Self {
            function: function.into(),
            source,
            text,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = AssumptionError::malformed("2x", "not a valid symbol name");
        assert_eq!(err.to_string(), "malformed assumption '2x': not a valid symbol name");
    }

    #[test]
    fn test_record_from_error() {
        let err = AssumptionError::malformed("", "empty assumption name");
        let record = MalformedAssumption::from_error("m.f", AssumptionSource::Comment { line: 3 }, err);

        assert_eq!(record.function, "m.f");
        assert_eq!(record.source, AssumptionSource::Comment { line: 3 });
        assert_eq!(record.text, "");
    }
}
