/*
 * Assumption Infrastructure
 *
 * Text-level discovery of declaration blocks and term parsing.
 */

mod block_scanner;
mod parser;

pub use block_scanner::{comment_block, doc_blocks, ASSUME_KEYWORD};
pub use parser::{parse_block, parse_term, ParsedBlock};
