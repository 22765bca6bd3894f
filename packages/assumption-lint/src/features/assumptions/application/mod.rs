/*
 * Assumption Application Layer
 */

mod table;

pub use table::{AnalyzedFunction, AssumptionTable, TableBuilder};
