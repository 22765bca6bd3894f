/*
 * Call Extraction Infrastructure
 */

mod extractor;

pub use extractor::{call_sites, collect_calls};
