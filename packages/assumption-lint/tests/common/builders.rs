//! Test data builders
//!
//! Program models are normally produced by a host front-end. These builders
//! produce the same shape directly: a doc string, calls at given lines, and
//! source lines, some of them marked as comment lines.

use std::collections::BTreeMap;

use assumption_lint::{FunctionDef, LineNo, ProgramModel, SyntaxNode};

/// Builder for one function
#[derive(Debug, Clone)]
pub struct FunctionBuilder {
    qualified_name: String,
    name: String,
    doc: Option<String>,
    start_line: LineNo,
    end_line: LineNo,
    statements: Vec<SyntaxNode>,
    lines: BTreeMap<LineNo, String>,
    comment_lines: Vec<LineNo>,
}

impl FunctionBuilder {
    /// Function `name` in module `module`, spanning lines 1..=20
    pub fn new(module: &str, name: &str) -> Self {
        Self {
            qualified_name: format!("{module}.{name}"),
            name: name.to_string(),
            doc: None,
            start_line: 1,
            end_line: 20,
            statements: Vec::new(),
            lines: BTreeMap::new(),
            comment_lines: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: &str) -> Self {
        self.doc = Some(doc.to_string());
        self
    }

    /// Shorthand for a one-line `assume:` doc
    pub fn assumes(self, terms: &str) -> Self {
        self.doc(&format!("assume: {terms}"))
    }

    /// Statement-level call `target()` at `line`
    pub fn call(mut self, target: &str, line: LineNo) -> Self {
        self.statements
            .push(SyntaxNode::single(SyntaxNode::call(target, line)));
        self
    }

    /// Call `outer(inner())` at `line`
    pub fn nested_call(mut self, outer: &str, inner: &str, line: LineNo) -> Self {
        self.statements.push(SyntaxNode::single(SyntaxNode::call_with_args(
            outer,
            line,
            vec![SyntaxNode::call(inner, line)],
        )));
        self
    }

    /// Arbitrary statement node
    pub fn statement(mut self, node: SyntaxNode) -> Self {
        self.statements.push(node);
        self
    }

    /// `# assume: <terms>` comment line at `line`
    pub fn comment_assumes(self, line: LineNo, terms: &str) -> Self {
        self.comment(line, &format!("    # assume: {terms}"))
    }

    /// Raw source line at `line`, marked as a comment
    pub fn comment(mut self, line: LineNo, text: &str) -> Self {
        self.lines.insert(line, text.to_string());
        self.comment_lines.push(line);
        self
    }

    /// Raw source line at `line`, not a comment (code, docstring text)
    pub fn source_line(mut self, line: LineNo, text: &str) -> Self {
        self.lines.insert(line, text.to_string());
        self
    }

    pub fn span(mut self, start_line: LineNo, end_line: LineNo) -> Self {
        self.start_line = start_line;
        self.end_line = end_line;
        self
    }

    pub fn build(self) -> FunctionDef {
        let lines = (self.start_line..=self.end_line)
            .map(|line| {
                self.lines
                    .get(&line)
                    .cloned()
                    .unwrap_or_else(|| "    pass".to_string())
            })
            .collect();

        let mut function = FunctionDef::new(
            self.qualified_name,
            self.name,
            SyntaxNode::sequence(self.statements),
        )
        .with_source(self.start_line, lines)
        .with_comment_lines(self.comment_lines);
        if let Some(doc) = self.doc {
            function = function.with_doc(doc);
        }
        function
    }
}

/// Builder for a program model
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    functions: Vec<FunctionDef>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn function(mut self, function: FunctionBuilder) -> Self {
        self.functions.push(function.build());
        self
    }

    pub fn build(self) -> ProgramModel {
        self.functions
            .into_iter()
            .fold(ProgramModel::new(), |model, f| model.with_function(f))
    }
}

/// Function in module `m`
pub fn func(name: &str) -> FunctionBuilder {
    FunctionBuilder::new("m", name)
}
