//! Program model
//!
//! Per function: qualified name, simple name, raw documentation text, the
//! source lines spanning the function and a structural expression tree.

mod program;
mod syntax;

pub use program::{FunctionDef, ProgramModel};
pub use syntax::{LineNo, SyntaxNode};
