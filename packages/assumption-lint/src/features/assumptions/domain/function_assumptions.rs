//! Per-function assumption record

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::term::AssumptionTerm;
use crate::shared::models::LineNo;

/// Assumptions declared by one function
///
/// Built once during the eager table pass, then treated as immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionAssumptions {
    pub qualified_name: String,

    /// Simple name (call-target matching key)
    pub name: String,

    /// Doc-declared terms, in declaration order
    pub doc_terms: Vec<AssumptionTerm>,

    /// Comment-declared terms keyed by the comment's line
    pub comment_terms: BTreeMap<LineNo, Vec<AssumptionTerm>>,
}

impl FunctionAssumptions {
    pub fn new(qualified_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            name: name.into(),
            doc_terms: Vec::new(),
            comment_terms: BTreeMap::new(),
        }
    }

    pub fn with_doc_terms(mut self, terms: Vec<AssumptionTerm>) -> Self {
        self.doc_terms = terms;
        self
    }

    pub fn add_comment_terms(&mut self, line: LineNo, terms: Vec<AssumptionTerm>) {
        if terms.is_empty() {
            return;
        }
        self.comment_terms.entry(line).or_default().extend(terms);
    }

    /// Comment terms active for a call at `line`: declared strictly before it
    pub fn comment_terms_before(&self, line: LineNo) -> impl Iterator<Item = &AssumptionTerm> + '_ {
        self.comment_terms
            .range(..line)
            .flat_map(|(_, terms)| terms.iter())
    }

    pub fn has_declarations(&self) -> bool {
        !self.doc_terms.is_empty() || !self.comment_terms.is_empty()
    }
}
