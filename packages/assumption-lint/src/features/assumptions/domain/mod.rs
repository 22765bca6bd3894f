/*
 * Assumption Domain Models
 */

mod error;
mod function_assumptions;
mod term;

pub use error::{AssumptionError, AssumptionSource, MalformedAssumption};
pub use function_assumptions::FunctionAssumptions;
pub use term::{AssumptionLabel, AssumptionSet, AssumptionTerm, DeclarationBlock, NEGATION_PREFIX};
