//! Conservative call walker

use tracing::trace;

use crate::features::call_extraction::domain::CallSite;
use crate::shared::models::{FunctionDef, SyntaxNode};

/// Collect call-expression nodes under `node`, in walk order
pub fn collect_calls(node: &SyntaxNode) -> Vec<&SyntaxNode> {
    let mut calls = Vec::new();
    walk(node, &mut calls);
    calls
}

fn walk<'a>(node: &'a SyntaxNode, calls: &mut Vec<&'a SyntaxNode>) {
    match node {
        SyntaxNode::Call { .. } => calls.push(node),
        SyntaxNode::Single { value } => walk(value, calls),
        SyntaxNode::Sequence { body } => {
            for child in body {
                walk(child, calls);
            }
        }
        SyntaxNode::Unordered { values } => {
            for child in values {
                walk(child, calls);
            }
        }
        SyntaxNode::Leaf => {}
    }
}

/// Call sites of `function`, in walk order
///
/// Calls without a textual target name cannot match any function and are
/// skipped here.
pub fn call_sites(function: &FunctionDef) -> Vec<CallSite> {
    collect_calls(&function.body)
        .into_iter()
        .filter_map(|node| match node {
            SyntaxNode::Call {
                callee: Some(name),
                line,
                ..
            } => Some(CallSite::new(&function.qualified_name, name, *line)),
            SyntaxNode::Call { callee: None, line, .. } => {
                trace!(
                    "{}: skipping call without target name at line {}",
                    function.qualified_name,
                    line
                );
                None
            }
            _ => None,
        })
        .collect()
}
