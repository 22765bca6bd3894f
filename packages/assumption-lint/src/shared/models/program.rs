//! Program model consumed from the host front-end

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::syntax::{LineNo, SyntaxNode};
use crate::errors::{AnalysisError, Result};

/// One analysed function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDef {
    /// Fully qualified name (e.g. `pkg.module.Class.method`)
    pub qualified_name: String,

    /// Simple name used for call-target matching
    pub name: String,

    /// Raw documentation text
    #[serde(default)]
    pub doc: Option<String>,

    /// Line number of `source_lines[0]`
    #[serde(default = "default_start_line")]
    pub start_line: LineNo,

    /// Source lines spanning the function, in order
    #[serde(default)]
    pub source_lines: Vec<String>,

    /// Lines the front-end tokenized as comments
    ///
    /// Only these lines are scanned for comment assumptions; docstring and
    /// string-literal lines never are.
    #[serde(default)]
    pub comment_lines: Vec<LineNo>,

    /// Structural expression tree of the function body
    #[serde(default)]
    pub body: SyntaxNode,
}

fn default_start_line() -> LineNo {
    1
}

impl FunctionDef {
    pub fn new(qualified_name: impl Into<String>, name: impl Into<String>, body: SyntaxNode) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            name: name.into(),
            doc: None,
            start_line: 1,
            source_lines: Vec::new(),
            comment_lines: Vec::new(),
            body,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Attach source lines; `start_line` is the line number of the first one
    pub fn with_source(mut self, start_line: LineNo, lines: Vec<String>) -> Self {
        self.start_line = start_line;
        self.source_lines = lines;
        self
    }

    /// Mark `lines` as comment lines
    pub fn with_comment_lines(mut self, lines: Vec<LineNo>) -> Self {
        self.comment_lines = lines;
        self
    }

    /// Line number of the last source line, `None` when the span does not
    /// fit in a line number or there are no source lines
    pub fn end_line(&self) -> Option<LineNo> {
        let extra = LineNo::try_from(self.source_lines.len().checked_sub(1)?).ok()?;
        self.start_line.checked_add(extra)
    }

    /// Source text at `line`, if inside the span
    pub fn source_line(&self, line: LineNo) -> Option<&str> {
        let offset = usize::try_from(line.checked_sub(self.start_line)?).ok()?;
        self.source_lines.get(offset).map(String::as_str)
    }

    /// Comment lines paired with their text, in source order
    pub fn comments(&self) -> impl Iterator<Item = (LineNo, &str)> + '_ {
        let mut lines = self.comment_lines.clone();
        lines.sort_unstable();
        lines.dedup();
        lines
            .into_iter()
            .filter_map(move |line| self.source_line(line).map(|text| (line, text)))
    }

    fn validate_span(&self) -> Result<()> {
        if self.source_lines.is_empty() {
            if let Some(line) = self.comment_lines.first() {
                return Err(AnalysisError::model(format!(
                    "{}: comment line {} without source lines",
                    self.qualified_name, line
                )));
            }
            return Ok(());
        }

        let end_line = self.end_line().ok_or_else(|| {
            AnalysisError::model(format!(
                "{}: {} source lines starting at line {} overflow the line range",
                self.qualified_name,
                self.source_lines.len(),
                self.start_line
            ))
        })?;

        if let Some(line) = self
            .comment_lines
            .iter()
            .find(|&&line| line < self.start_line || line > end_line)
        {
            return Err(AnalysisError::model(format!(
                "{}: comment line {} outside source span {}..={}",
                self.qualified_name, line, self.start_line, end_line
            )));
        }
        Ok(())
    }
}

/// Whole program handed over by the front-end
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramModel {
    pub functions: Vec<FunctionDef>,
}

impl ProgramModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_function(mut self, function: FunctionDef) -> Self {
        self.functions.push(function);
        self
    }

    /// Deserialize a program model serialized by the front-end
    pub fn from_json(json: &str) -> Result<Self> {
        let model: ProgramModel = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Check structural consistency.
    ///
    /// Qualified names identify functions on paths and in the cycle guard,
    /// so they must be unique and non-empty. Simple names may repeat.
    /// Source spans must fit in the line range and contain every comment
    /// line.
    pub fn validate(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for function in &self.functions {
            if function.qualified_name.is_empty() || function.name.is_empty() {
                return Err(AnalysisError::model(format!(
                    "function with empty name (qualified: '{}', simple: '{}')",
                    function.qualified_name, function.name
                )));
            }
            if !seen.insert(function.qualified_name.as_str()) {
                return Err(AnalysisError::model(format!(
                    "duplicate qualified name '{}'",
                    function.qualified_name
                )));
            }
            function.validate_span()?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
