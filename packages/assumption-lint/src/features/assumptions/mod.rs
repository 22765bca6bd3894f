/*
 * Assumption Extraction
 *
 * Turns `assume:` declarations into boolean terms and indexes them per
 * function.
 *
 * Architecture:
 * - Domain: AssumptionLabel, AssumptionTerm, AssumptionSet, FunctionAssumptions
 * - Infrastructure: block scanner (doc/comment discovery), term parser
 * - Application: AssumptionTable (eager, immutable after build)
 *
 * Mini-language:
 * ```text
 * assume: sorted, no-empty        → [sorted, ¬empty]
 * assume: a,                      → block opener at column c
 *     b                           → continues (indented at column c)
 * # assume: cached                → comment form, one line only
 * ```
 */

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use domain::{
    AssumptionError, AssumptionLabel, AssumptionSet, AssumptionSource, AssumptionTerm,
    DeclarationBlock, FunctionAssumptions, MalformedAssumption,
};

pub use application::{AnalyzedFunction, AssumptionTable, TableBuilder};

pub use infrastructure::{comment_block, doc_blocks, parse_block, parse_term, ParsedBlock};
