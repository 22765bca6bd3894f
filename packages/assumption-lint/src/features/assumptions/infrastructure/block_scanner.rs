//! Declaration block discovery
//!
//! Documentation: a line whose stripped text starts with `assume:` opens a
//! block; the keyword's column is remembered. A following line continues the
//! block only if the text at that column starts with indentation (two spaces
//! or a tab). Any other line closes it, and may itself open the next block.
//!
//! Comments: one comment line, one block. Comments never span lines.

use crate::features::assumptions::domain::DeclarationBlock;

/// Keyword opening a declaration block
pub const ASSUME_KEYWORD: &str = "assume:";

/// Split documentation text into declaration blocks, in encounter order
pub fn doc_blocks(doc: &str) -> Vec<DeclarationBlock> {
    let mut blocks = Vec::new();
    // (keyword column in chars, block being collected)
    let mut current: Option<(usize, DeclarationBlock)> = None;

    for line in doc.lines() {
        if line.trim().starts_with(ASSUME_KEYWORD) {
            if let Some((_, block)) = current.take() {
                blocks.push(block);
            }
            if let Some(byte_pos) = line.find(ASSUME_KEYWORD) {
                let column = line[..byte_pos].chars().count();
                let rest = line[byte_pos + ASSUME_KEYWORD.len()..].trim();
                current = Some((column, DeclarationBlock::new(vec![rest.to_string()])));
            }
        } else if let Some((column, mut block)) = current.take() {
            if continues_block(line, column) {
                block.push(line.trim());
                current = Some((column, block));
            } else {
                blocks.push(block);
            }
        }
    }

    // A block still open at the end of the text is closed by it
    if let Some((_, block)) = current {
        blocks.push(block);
    }

    blocks
}

fn continues_block(line: &str, column: usize) -> bool {
    let mut tail = line.chars().skip(column);
    matches!((tail.next(), tail.next()), (Some('\t'), _) | (Some(' '), Some(' ')))
}

/// Declaration block carried by a single comment line, if any
///
/// `line` is the raw source line; `comment_prefix` is the comment marker
/// (`#`, `//`, ...). Only full-line comments are considered.
pub fn comment_block(line: &str, comment_prefix: &str) -> Option<DeclarationBlock> {
    let rest = line
        .trim()
        .strip_prefix(comment_prefix)?
        .trim_start()
        .strip_prefix(ASSUME_KEYWORD)?;
    Some(DeclarationBlock::new(vec![rest.trim().to_string()]))
}
