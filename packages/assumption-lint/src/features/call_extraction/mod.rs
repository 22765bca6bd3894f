/*
 * Call Extraction
 *
 * Finds call expressions in a function body with a conservative,
 * single-branch-per-node-kind walk:
 * - Single    → recurse into the one sub-expression
 * - Sequence  → recurse into each child, in order
 * - Unordered → recurse into each sub-node
 * - Call      → collected, NOT descended into
 *
 * Calls nested inside another call's arguments are therefore never
 * discovered. Existing analysis results depend on this; keep it shallow.
 */

pub mod domain;
pub mod infrastructure;

pub use domain::CallSite;
pub use infrastructure::{call_sites, collect_calls};
