//! Assumption terms
//!
//! A term is a boolean literal over a named assumption: `sorted` or
//! `no-sorted`. Contradictions between terms are never detected here; that is
//! the solver's job.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::AssumptionError;

/// Literal prefix marking a negated term
pub const NEGATION_PREFIX: &str = "no-";

/// Symbol names: identifier start, then identifier characters or `-`
static LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_\-]*$").expect("label pattern is a valid regex")
});

/// Assumption name (valid symbol name, non-empty)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssumptionLabel(String);

impl AssumptionLabel {
    /// Validate `name` as a symbol name
    pub fn new(name: impl Into<String>) -> Result<Self, AssumptionError> {
        let name = name.into();
        if name.is_empty() {
            return Err(AssumptionError::malformed(name, "empty assumption name"));
        }
        if !LABEL_RE.is_match(&name) {
            return Err(AssumptionError::malformed(name, "not a valid symbol name"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AssumptionLabel {
    type Error = AssumptionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AssumptionLabel> for String {
    fn from(label: AssumptionLabel) -> Self {
        label.0
    }
}

impl fmt::Display for AssumptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Boolean literal over an assumption label
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssumptionTerm {
    /// `label` holds
    Literal(AssumptionLabel),

    /// `label` does not hold (`no-label`)
    Not(AssumptionLabel),
}

impl AssumptionTerm {
    pub fn literal(label: AssumptionLabel) -> Self {
        Self::Literal(label)
    }

    pub fn not(label: AssumptionLabel) -> Self {
        Self::Not(label)
    }

    pub fn label(&self) -> &AssumptionLabel {
        match self {
            Self::Literal(label) | Self::Not(label) => label,
        }
    }

    pub fn is_negated(&self) -> bool {
        matches!(self, Self::Not(_))
    }

    /// Logical negation
    pub fn negate(&self) -> Self {
        match self {
            Self::Literal(label) => Self::Not(label.clone()),
            Self::Not(label) => Self::Literal(label.clone()),
        }
    }
}

impl fmt::Display for AssumptionTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(label) => write!(f, "{}", label),
            Self::Not(label) => write!(f, "{}{}", NEGATION_PREFIX, label),
        }
    }
}

/// Insertion-ordered set of terms
///
/// Accumulated assumption sets only grow along a path. Order is kept for
/// diagnostics; `fingerprint` gives an order-independent key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssumptionSet {
    terms: Vec<AssumptionTerm>,
}

impl AssumptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_terms<'a>(terms: impl IntoIterator<Item = &'a AssumptionTerm>) -> Self {
        let mut set = Self::new();
        set.extend(terms);
        set
    }

    /// Add a term; returns false if it was already present
    pub fn insert(&mut self, term: AssumptionTerm) -> bool {
        if self.terms.contains(&term) {
            return false;
        }
        self.terms.push(term);
        true
    }

    pub fn extend<'a>(&mut self, terms: impl IntoIterator<Item = &'a AssumptionTerm>) {
        for term in terms {
            self.insert(term.clone());
        }
    }

    /// Union with `terms`, leaving `self` untouched
    pub fn union<'a>(&self, terms: impl IntoIterator<Item = &'a AssumptionTerm>) -> Self {
        let mut next = self.clone();
        next.extend(terms);
        next
    }

    pub fn contains(&self, term: &AssumptionTerm) -> bool {
        self.terms.contains(term)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssumptionTerm> {
        self.terms.iter()
    }

    pub fn as_slice(&self) -> &[AssumptionTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Canonical, order-independent form of the set
    pub fn fingerprint(&self) -> Vec<AssumptionTerm> {
        let mut terms = self.terms.clone();
        terms.sort();
        terms
    }
}

impl<'a> IntoIterator for &'a AssumptionSet {
    type Item = &'a AssumptionTerm;
    type IntoIter = std::slice::Iter<'a, AssumptionTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl fmt::Display for AssumptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", term)?;
        }
        write!(f, "]")
    }
}

/// Ordered text fragments forming one assumption statement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationBlock {
    pub fragments: Vec<String>,
}

impl DeclarationBlock {
    pub fn new(fragments: Vec<String>) -> Self {
        Self { fragments }
    }

    pub fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Fragments joined by a single space
    pub fn text(&self) -> String {
        self.fragments.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str) -> AssumptionLabel {
        AssumptionLabel::new(name).unwrap()
    }

    #[test]
    fn test_label_validation() {
        assert!(AssumptionLabel::new("sorted").is_ok());
        assert!(AssumptionLabel::new("_private").is_ok());
        assert!(AssumptionLabel::new("non-empty").is_ok());
        assert!(AssumptionLabel::new("x2").is_ok());

        assert!(AssumptionLabel::new("").is_err());
        assert!(AssumptionLabel::new("2fast").is_err());
        assert!(AssumptionLabel::new("two words").is_err());
        assert!(AssumptionLabel::new("-x").is_err());
    }

    #[test]
    fn test_negate_is_involution() {
        let t = AssumptionTerm::literal(label("ready"));
        assert_eq!(t.negate(), AssumptionTerm::not(label("ready")));
        assert_eq!(t.negate().negate(), t);
        assert!(t.negate().is_negated());
        assert_eq!(t.negate().label(), t.label());
    }

    #[test]
    fn test_term_display() {
        assert_eq!(AssumptionTerm::literal(label("ready")).to_string(), "ready");
        assert_eq!(AssumptionTerm::not(label("ready")).to_string(), "no-ready");
    }

    #[test]
    fn test_set_keeps_order_and_dedups() {
        let a = AssumptionTerm::literal(label("a"));
        let b = AssumptionTerm::not(label("b"));

        let mut set = AssumptionSet::new();
        assert!(set.insert(b.clone()));
        assert!(set.insert(a.clone()));
        assert!(!set.insert(b.clone()));

        assert_eq!(set.as_slice(), &[b.clone(), a.clone()]);
        assert_eq!(set.to_string(), "[no-b, a]");
    }

    #[test]
    fn test_set_keeps_both_polarities() {
        let a = AssumptionTerm::literal(label("a"));
        let set = AssumptionSet::from_terms(&[a.clone(), a.negate()]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_fingerprint_is_order_independent() {
        let a = AssumptionTerm::literal(label("a"));
        let b = AssumptionTerm::literal(label("b"));

        let ab = AssumptionSet::from_terms(&[a.clone(), b.clone()]);
        let ba = AssumptionSet::from_terms(&[b, a]);
        assert_ne!(ab, ba);
        assert_eq!(ab.fingerprint(), ba.fingerprint());
    }

    #[test]
    fn test_union_leaves_original() {
        let a = AssumptionTerm::literal(label("a"));
        let b = AssumptionTerm::literal(label("b"));

        let base = AssumptionSet::from_terms(&[a]);
        let grown = base.union(&[b]);
        assert_eq!(base.len(), 1);
        assert_eq!(grown.len(), 2);
    }

    #[test]
    fn test_label_serde_validates() {
        let ok: Result<AssumptionLabel, _> = serde_json::from_str("\"ready\"");
        assert!(ok.is_ok());

        let bad: Result<AssumptionLabel, _> = serde_json::from_str("\"not valid\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_declaration_block_text() {
        let block = DeclarationBlock::new(vec!["a,".to_string(), "b".to_string()]);
        assert_eq!(block.text(), "a, b");
    }
}
