//! Structural expression tree
//!
//! A deliberately small, closed set of node kinds. The front-end maps its
//! own AST onto these shapes:
//!
//! ```text
//! Call        f(a, b)                  → collected, never descended into
//! Single      return x / expr stmt     → exactly one sub-expression
//! Sequence    function body / block    → ordered statement-like children
//! Unordered   keyword map / dict       → unordered collection of sub-nodes
//! Leaf        name / constant          → nothing to walk
//! ```

use serde::{Deserialize, Serialize};

/// Source line number (1-based)
pub type LineNo = u32;

/// Node of the structural expression tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyntaxNode {
    /// Call expression
    Call {
        /// Textual name of the call target. `None` when the target is not a
        /// plain name (e.g. `make()()`, `obj[0]()`).
        callee: Option<String>,

        /// Line of the call expression
        line: LineNo,

        /// Argument expressions
        #[serde(default)]
        args: Vec<SyntaxNode>,
    },

    /// Node holding exactly one sub-expression
    Single { value: Box<SyntaxNode> },

    /// Ordered sequence of statement-like children
    Sequence { body: Vec<SyntaxNode> },

    /// Unordered collection of sub-nodes
    Unordered { values: Vec<SyntaxNode> },

    /// Anything without walkable children
    #[default]
    Leaf,
}

impl SyntaxNode {
    /// Call to a plainly named target
    pub fn call(callee: impl Into<String>, line: LineNo) -> Self {
        Self::Call {
            callee: Some(callee.into()),
            line,
            args: Vec::new(),
        }
    }

    /// Call to a plainly named target with argument expressions
    pub fn call_with_args(callee: impl Into<String>, line: LineNo, args: Vec<SyntaxNode>) -> Self {
        Self::Call {
            callee: Some(callee.into()),
            line,
            args,
        }
    }

    /// Call whose target has no textual name
    pub fn anonymous_call(line: LineNo) -> Self {
        Self::Call {
            callee: None,
            line,
            args: Vec::new(),
        }
    }

    pub fn single(value: SyntaxNode) -> Self {
        Self::Single {
            value: Box::new(value),
        }
    }

    pub fn sequence(body: Vec<SyntaxNode>) -> Self {
        Self::Sequence { body }
    }

    pub fn unordered(values: Vec<SyntaxNode>) -> Self {
        Self::Unordered { values }
    }

    /// Check if this node is a call expression
    pub fn is_call(&self) -> bool {
        matches!(self, Self::Call { .. })
    }
}
