/*
 * Interprocedural Assumption Checker
 *
 * Depth-first walk of the call graph from every function.
 *
 * Algorithm (per function F with active set A and path P):
 * 1. For each call site C of F (self-calls skipped):
 *    effective = A ∪ comment terms of F declared before C.line
 * 2. For each candidate G with G.name == C.target_name:
 *    reset; assert effective; assert G's doc terms one by one, checking
 *    after each
 *    - UNSAT → report (P, G, effective, G.doc, term), do not follow the edge
 *    - SAT   → recurse into G with effective ∪ G.doc, path P + [G]
 *
 * Termination:
 * - on-path guard: (G.qualified_name, canonical set) already on the
 *   current path → prune
 * - path-length bound → prune
 *
 * The solver session is owned by the checker and never shared.
 */

use rustc_hash::FxHashSet;
use tracing::{debug, info, trace, warn};

use crate::config::CheckerConfig;
use crate::features::assumption_check::domain::{CheckStats, ViolationReport};
use crate::features::assumption_check::ports::FindingSink;
use crate::features::assumptions::{AnalyzedFunction, AssumptionSet, AssumptionTable, AssumptionTerm};
use crate::features::call_extraction::CallSite;
use crate::features::smt::{SatSession, SolverError};
use crate::shared::models::LineNo;

/// (function qualified name, canonical assumption set)
type GuardKey = (String, Vec<AssumptionTerm>);

/// Interprocedural checker over an immutable assumption table
///
/// Generic over the SAT backend so tests can plug in a native session and
/// the service can plug in a boxed, config-selected one.
pub struct AssumptionChecker<'t, S: SatSession> {
    table: &'t AssumptionTable,

    /// The single session for the whole run
    session: S,

    /// Merge comment-scoped assumptions before each call
    comment_assumptions: bool,

    /// Max functions on one path
    max_path_length: usize,

    cycle_guard: bool,

    /// Guard keys of the functions on the current path
    on_path: FxHashSet<GuardKey>,

    stats: CheckStats,
}

impl<'t, S: SatSession> AssumptionChecker<'t, S> {
    pub fn new(table: &'t AssumptionTable, session: S, config: &CheckerConfig) -> Self {
        Self {
            table,
            session,
            comment_assumptions: config.comment_assumptions,
            max_path_length: config.max_path_length,
            cycle_guard: config.cycle_guard,
            on_path: FxHashSet::default(),
            stats: CheckStats::default(),
        }
    }

    /// Statistics of the last run
    pub fn stats(&self) -> &CheckStats {
        &self.stats
    }

    /// Check every function as an analysis root
    ///
    /// A solver failure aborts the run; reports already handed to `sink`
    /// must then be discarded by the caller.
    pub fn run(&mut self, sink: &mut dyn FindingSink) -> Result<CheckStats, SolverError> {
        self.stats = CheckStats::default();
        self.on_path.clear();

        let table = self.table;
        for root in table.functions() {
            self.check_root(root, sink)?;
        }

        info!(
            "Assumption check complete ({}): {}",
            self.session.name(),
            self.stats
        );
        Ok(self.stats.clone())
    }

    /// Check a single root function
    pub fn check_root(
        &mut self,
        root: &'t AnalyzedFunction,
        sink: &mut dyn FindingSink,
    ) -> Result<(), SolverError> {
        self.stats.roots += 1;

        let assumptions = AssumptionSet::from_terms(&root.assumptions.doc_terms);
        let key = guard_key(root, &assumptions);
        if self.cycle_guard {
            self.on_path.insert(key.clone());
        }

        let mut path = vec![root.qualified_name().to_string()];
        self.stats.max_path_length = self.stats.max_path_length.max(1);
        let result = self.check_function(root, &assumptions, &mut path, sink);

        if self.cycle_guard {
            self.on_path.remove(&key);
        }
        result
    }

    fn check_function(
        &mut self,
        function: &'t AnalyzedFunction,
        assumptions: &AssumptionSet,
        path: &mut Vec<String>,
        sink: &mut dyn FindingSink,
    ) -> Result<(), SolverError> {
        debug!("{}: {}", function.qualified_name(), assumptions);

        let table = self.table;
        for call in &function.call_sites {
            if call.target_name == function.name() {
                trace!("{}: skipping self-call at line {}", call.caller, call.line);
                self.stats.self_calls_skipped += 1;
                continue;
            }

            let mut candidates = table.candidates(&call.target_name).peekable();
            if candidates.peek().is_none() {
                trace!(
                    "{}: unresolved call target {} at line {}",
                    call.caller,
                    call.target_name,
                    call.line
                );
                self.stats.unresolved_targets += 1;
                continue;
            }

            let effective = self.effective_assumptions(function, assumptions, call.line);
            for callee in candidates {
                self.check_edge(call, callee, &effective, path, sink)?;
            }
        }

        Ok(())
    }

    fn check_edge(
        &mut self,
        call: &CallSite,
        callee: &'t AnalyzedFunction,
        effective: &AssumptionSet,
        path: &mut Vec<String>,
        sink: &mut dyn FindingSink,
    ) -> Result<(), SolverError> {
        self.stats.edges_examined += 1;
        debug!("callee = {} ({})", call.target_name, callee.qualified_name());

        if let Some(offending) = self.find_conflict(effective, callee)? {
            debug!(
                "conflict: {} -> {} on {}",
                call.caller,
                callee.qualified_name(),
                offending
            );
            self.stats.violations += 1;
            sink.report(ViolationReport {
                path: path.clone(),
                callee: callee.name().to_string(),
                callee_qualified_name: callee.qualified_name().to_string(),
                line: call.line,
                caller_assumptions: effective.clone(),
                callee_assumptions: AssumptionSet::from_terms(&callee.assumptions.doc_terms),
                offending,
            });
            return Ok(());
        }

        let next = effective.union(&callee.assumptions.doc_terms);
        self.descend(callee, next, path, sink)
    }

    /// Assert `effective`, then the callee's doc terms one by one
    ///
    /// Returns the first callee term that makes the session UNSAT.
    fn find_conflict(
        &mut self,
        effective: &AssumptionSet,
        callee: &AnalyzedFunction,
    ) -> Result<Option<AssumptionTerm>, SolverError> {
        self.session.reset();
        self.session.assert_all(effective)?;

        for term in &callee.assumptions.doc_terms {
            self.session.assert_term(term)?;
            self.stats.solver_checks += 1;
            if self.session.check()?.is_unsat() {
                return Ok(Some(term.clone()));
            }
        }

        Ok(None)
    }

    fn descend(
        &mut self,
        callee: &'t AnalyzedFunction,
        assumptions: AssumptionSet,
        path: &mut Vec<String>,
        sink: &mut dyn FindingSink,
    ) -> Result<(), SolverError> {
        if path.len() >= self.max_path_length {
            warn!(
                "path bound {} reached at {} -> {}, not descending",
                self.max_path_length,
                path.join("->"),
                callee.qualified_name()
            );
            self.stats.pruned_by_bound += 1;
            return Ok(());
        }

        let key = guard_key(callee, &assumptions);
        if self.cycle_guard && !self.on_path.insert(key.clone()) {
            warn!(
                "{} already on path {} with {}, not descending",
                callee.qualified_name(),
                path.join("->"),
                assumptions
            );
            self.stats.pruned_by_guard += 1;
            return Ok(());
        }

        trace!("recursive: {} called {}", path.join("->"), callee.qualified_name());
        path.push(callee.qualified_name().to_string());
        self.stats.max_path_length = self.stats.max_path_length.max(path.len());

        let result = self.check_function(callee, &assumptions, path, sink);

        path.pop();
        if self.cycle_guard {
            self.on_path.remove(&key);
        }
        result
    }

    fn effective_assumptions(
        &self,
        function: &AnalyzedFunction,
        assumptions: &AssumptionSet,
        line: LineNo,
    ) -> AssumptionSet {
        if !self.comment_assumptions {
            return assumptions.clone();
        }
        assumptions.union(function.assumptions.comment_terms_before(line))
    }
}

fn guard_key(function: &AnalyzedFunction, assumptions: &AssumptionSet) -> GuardKey {
    (function.qualified_name().to_string(), assumptions.fingerprint())
}
