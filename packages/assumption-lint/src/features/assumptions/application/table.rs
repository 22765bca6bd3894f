/*
 * Assumption Table
 *
 * One eager pass over the whole program model:
 * - doc blocks → doc terms (concatenated in encounter order)
 * - host-marked comment lines → line-indexed comment terms (when enabled)
 * - body → call sites (full enumeration up front)
 *
 * No parsing happens once checking starts; the table is immutable.
 */

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::config::CheckerConfig;
use crate::features::assumptions::domain::{
    AssumptionSource, FunctionAssumptions, MalformedAssumption,
};
use crate::features::assumptions::infrastructure::{comment_block, doc_blocks, parse_block};
use crate::features::call_extraction::{call_sites, CallSite};
use crate::shared::models::{FunctionDef, ProgramModel};

/// Table entry: declared assumptions plus the function's call sites
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedFunction {
    pub assumptions: FunctionAssumptions,
    pub call_sites: Vec<CallSite>,
}

impl AnalyzedFunction {
    pub fn qualified_name(&self) -> &str {
        &self.assumptions.qualified_name
    }

    pub fn name(&self) -> &str {
        &self.assumptions.name
    }
}

/// Per-function assumptions, indexed by simple name
#[derive(Debug, Clone, Default)]
pub struct AssumptionTable {
    functions: Vec<AnalyzedFunction>,

    /// Simple name → indices into `functions` (several on ambiguity)
    by_name: FxHashMap<String, Vec<usize>>,

    malformed: Vec<MalformedAssumption>,
}

impl AssumptionTable {
    /// All functions, in program model order
    pub fn functions(&self) -> &[AnalyzedFunction] {
        &self.functions
    }

    /// Every function whose simple name equals `name`
    pub fn candidates<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a AnalyzedFunction> + 'a {
        self.by_name
            .get(name)
            .map(|indices| indices.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&idx| &self.functions[idx])
    }

    pub fn get(&self, qualified_name: &str) -> Option<&AnalyzedFunction> {
        self.functions
            .iter()
            .find(|f| f.qualified_name() == qualified_name)
    }

    /// Terms dropped while building the table
    pub fn malformed(&self) -> &[MalformedAssumption] {
        &self.malformed
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// Builds an [`AssumptionTable`] from a program model
#[derive(Debug, Clone)]
pub struct TableBuilder {
    /// Comment marker; `None` disables comment-scoped assumptions
    comment_prefix: Option<String>,
}

impl TableBuilder {
    /// Doc assumptions only
    pub fn new() -> Self {
        Self {
            comment_prefix: None,
        }
    }

    /// Also collect comment assumptions marked by `prefix`
    pub fn with_comments(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = Some(prefix.into());
        self
    }

    pub fn from_config(config: &CheckerConfig) -> Self {
        let builder = Self::new();
        if config.comment_assumptions {
            builder.with_comments(config.comment_prefix.clone())
        } else {
            builder
        }
    }

    pub fn build(&self, model: &ProgramModel) -> AssumptionTable {
        let mut table = AssumptionTable::default();

        for function in &model.functions {
            let entry = self.analyze_function(function, &mut table.malformed);
            debug!(
                "{}: {} doc terms, {} comment lines, {} call sites",
                function.qualified_name,
                entry.assumptions.doc_terms.len(),
                entry.assumptions.comment_terms.len(),
                entry.call_sites.len()
            );

            table
                .by_name
                .entry(function.name.clone())
                .or_default()
                .push(table.functions.len());
            table.functions.push(entry);
        }

        table
    }

    fn analyze_function(
        &self,
        function: &FunctionDef,
        malformed: &mut Vec<MalformedAssumption>,
    ) -> AnalyzedFunction {
        let mut assumptions = FunctionAssumptions::new(&function.qualified_name, &function.name);

        if let Some(doc) = &function.doc {
            for block in doc_blocks(doc) {
                let parsed = parse_block(&block);
                assumptions.doc_terms.extend(parsed.terms);
                malformed.extend(parsed.errors.into_iter().map(|err| {
                    MalformedAssumption::from_error(&function.qualified_name, AssumptionSource::Doc, err)
                }));
            }
        }

        if let Some(prefix) = &self.comment_prefix {
            for (line, text) in function.comments() {
                let Some(block) = comment_block(text, prefix) else {
                    continue;
                };
                let parsed = parse_block(&block);
                assumptions.add_comment_terms(line, parsed.terms);
                malformed.extend(parsed.errors.into_iter().map(|err| {
                    MalformedAssumption::from_error(
                        &function.qualified_name,
                        AssumptionSource::Comment { line },
                        err,
                    )
                }));
            }
        }

        AnalyzedFunction {
            assumptions,
            call_sites: call_sites(function),
        }
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
