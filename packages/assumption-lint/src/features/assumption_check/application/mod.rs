//! Assumption check application layer

mod checker;
mod diagnostics;

pub use checker::AssumptionChecker;
pub use diagnostics::Diagnostic;
