/*
 * Assumption Check
 *
 * Interprocedural propagation of declared assumptions:
 * - every function is an analysis root, starting from its doc assumptions
 * - each call edge is checked against the callee's doc assumptions,
 *   one term at a time, so the offending term is known exactly
 * - a conflicting edge is reported and not followed further
 * - a satisfiable edge is followed with the union of both sets
 *
 * Termination on mutual recursion is enforced by an on-path guard keyed by
 * (callee, canonical assumption set) and by a path-length bound.
 */

pub mod application;
pub mod domain;
pub mod ports;

pub use application::{AssumptionChecker, Diagnostic};
pub use domain::{CheckStats, ViolationReport};
pub use ports::FindingSink;
