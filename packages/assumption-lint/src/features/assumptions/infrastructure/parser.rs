//! Assumption term parser
//!
//! Block text → fragments joined by a single space → split on `,` → each
//! piece trimmed → optional `no-` prefix → symbol name.

use tracing::warn;

use crate::features::assumptions::domain::{
    AssumptionError, AssumptionLabel, AssumptionTerm, DeclarationBlock, NEGATION_PREFIX,
};

/// Result of parsing one declaration block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBlock {
    /// Well-formed terms, in declaration order
    pub terms: Vec<AssumptionTerm>,

    /// Dropped terms
    pub errors: Vec<AssumptionError>,
}

/// Parse a single comma-free piece
pub fn parse_term(piece: &str) -> Result<AssumptionTerm, AssumptionError> {
    let text = piece.trim();
    let (negated, name) = match text.strip_prefix(NEGATION_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let label = AssumptionLabel::new(name).map_err(|err| match err {
        AssumptionError::Malformed { reason, .. } => AssumptionError::malformed(text, reason),
    })?;

    Ok(if negated {
        AssumptionTerm::not(label)
    } else {
        AssumptionTerm::literal(label)
    })
}

/// Parse every term of a block; malformed terms are dropped, not fatal
pub fn parse_block(block: &DeclarationBlock) -> ParsedBlock {
    let mut parsed = ParsedBlock::default();

    for piece in block.text().split(',') {
        match parse_term(piece) {
            Ok(term) => parsed.terms.push(term),
            Err(err) => {
                warn!("Dropping assumption term: {}", err);
                parsed.errors.push(err);
            }
        }
    }

    parsed
}
