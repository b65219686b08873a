//! Refutation search with the unit-preference strategy.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::clause_set::ClauseSet;
use super::config::{PairSelection, ProverConfig};
use super::resolution::{resolve, resolve_all, Resolvent};
use super::trace::{ProofTrace, TraceEvent};
use crate::parser::parse_formula;
use crate::syntax::{Clause, Signature};

/// Why a proof attempt stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The empty clause was derived.
    Contradiction,
    /// No formula produced a clause.
    NoClauses,
    /// Every clause was used as a pivot without reaching a contradiction.
    SupplyExhausted,
    /// The step budget ran out with pivots still queued.
    StepLimit,
}

/// Counters collected during one proof attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStats {
    /// Pivots processed.
    pub steps: usize,
    /// Clauses in the working set at the end, inputs included.
    pub clauses_kept: usize,
    /// Resolvents produced, including duplicates that were dropped.
    pub resolvents_generated: usize,
}

/// Result of [`Prover::prove`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofOutcome {
    pub proved: bool,
    pub termination: Termination,
    pub trace: ProofTrace,
    pub stats: ProofStats,
}

impl ProofOutcome {
    /// The trace as `Step <n>: <message>` lines.
    pub fn trace_lines(&self) -> Vec<String> {
        self.trace.lines()
    }

    pub fn verdict(&self) -> &'static str {
        if self.proved {
            "proved"
        } else {
            "not proved"
        }
    }
}

impl fmt::Display for ProofOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.trace)?;
        write!(f, "Result: {}", self.verdict())
    }
}

/// Resolution prover.
///
/// Holds configuration only. Every call to [`Prover::prove`] builds a fresh
/// derivation, so one prover can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Prover {
    config: ProverConfig,
}

impl Prover {
    pub fn new(config: ProverConfig) -> Self {
        Prover { config }
    }

    pub fn config(&self) -> &ProverConfig {
        &self.config
    }

    /// Try to refute the conjunction of `formulas`.
    ///
    /// Never fails: formulas that do not parse are reported in the trace and
    /// skipped.
    pub fn prove<S: AsRef<str>>(&self, formulas: &[S]) -> ProofOutcome {
        let mut derivation = Derivation::new(&self.config);
        for formula in formulas {
            let formula = formula.as_ref();
            match parse_formula(formula) {
                Ok(clause) => derivation.add_input(clause),
                Err(err) => {
                    warn!(formula, error = %err, "skipping formula");
                    derivation.trace.record(TraceEvent::ParseFailed {
                        formula: formula.to_string(),
                        error: err.to_string(),
                    });
                }
            }
        }
        derivation.run()
    }

    /// Try to refute a set of already-built clauses.
    pub fn prove_clauses(&self, clauses: impl IntoIterator<Item = Clause>) -> ProofOutcome {
        let mut derivation = Derivation::new(&self.config);
        for clause in clauses {
            derivation.add_input(clause);
        }
        derivation.run()
    }
}

/// State of one proof attempt.
struct Derivation<'a> {
    config: &'a ProverConfig,
    clauses: ClauseSet,
    trace: ProofTrace,
    stats: ProofStats,
}

impl<'a> Derivation<'a> {
    fn new(config: &'a ProverConfig) -> Self {
        Derivation {
            config,
            clauses: ClauseSet::new(config.dedup),
            trace: ProofTrace::new(),
            stats: ProofStats::default(),
        }
    }

    fn add_input(&mut self, clause: Clause) {
        let rendered = clause.to_string();
        if self.clauses.insert_initial(clause).is_some() {
            self.trace.record(TraceEvent::ClauseAdded { clause: rendered });
        } else {
            debug!(clause = %rendered, "duplicate input clause");
            self.trace.record(TraceEvent::DuplicateClause { clause: rendered });
        }
    }

    fn run(mut self) -> ProofOutcome {
        if self.clauses.is_empty() {
            self.trace.record(TraceEvent::NoUsableClauses);
            return self.finish(Termination::NoClauses);
        }

        let signature = Signature::from_clauses(self.clauses.iter());
        for (predicate, arities) in signature.arity_conflicts() {
            warn!(predicate, ?arities, "predicate used with several arities");
        }

        if self.clauses.iter().any(Clause::is_empty) {
            self.trace.record(TraceEvent::Contradiction);
            return self.finish(Termination::Contradiction);
        }

        while self.stats.steps < self.config.max_steps {
            let Some(pivot) = self.clauses.next_pivot() else {
                break;
            };
            self.stats.steps += 1;
            debug!(
                step = self.stats.steps,
                pivot = %self.clauses.get(pivot),
                "selected pivot"
            );
            if self.resolve_pivot(pivot) {
                self.trace.record(TraceEvent::Contradiction);
                return self.finish(Termination::Contradiction);
            }
        }

        if self.clauses.has_pending() {
            self.trace.record(TraceEvent::StepLimitReached {
                max_steps: self.config.max_steps,
            });
            self.finish(Termination::StepLimit)
        } else {
            self.trace.record(TraceEvent::SupplyExhausted {
                steps: self.stats.steps,
            });
            self.finish(Termination::SupplyExhausted)
        }
    }

    /// Resolve the pivot against its partners. Returns true once the empty
    /// clause is derived.
    fn resolve_pivot(&mut self, pivot: usize) -> bool {
        let pivot_clause = self.clauses.get(pivot).clone();
        for partner in self.clauses.partners_for(pivot) {
            if partner == pivot {
                continue;
            }
            let candidate = self.clauses.get(partner).clone();
            for resolvent in self.resolvents(&pivot_clause, &candidate) {
                self.stats.resolvents_generated += 1;
                let rendered = resolvent.clause.to_string();

                if resolvent.is_empty() {
                    self.record_resolution(&pivot_clause, &candidate, rendered);
                    return true;
                }
                if self.clauses.insert_derived(resolvent.clause).is_some() {
                    debug!(resolvent = %rendered, "new clause");
                    self.record_resolution(&pivot_clause, &candidate, rendered);
                }
            }
        }
        false
    }

    fn resolvents(&self, pivot: &Clause, candidate: &Clause) -> Vec<Resolvent> {
        match self.config.pair_selection {
            PairSelection::FirstMatch => resolve(pivot, candidate, self.config.unifier)
                .into_iter()
                .collect(),
            PairSelection::All => resolve_all(pivot, candidate, self.config.unifier),
        }
    }

    fn record_resolution(&mut self, left: &Clause, right: &Clause, resolvent: String) {
        self.trace.record(TraceEvent::Resolution {
            left: left.to_string(),
            right: right.to_string(),
            resolvent,
        });
    }

    fn finish(mut self, termination: Termination) -> ProofOutcome {
        self.stats.clauses_kept = self.clauses.len();
        let proved = termination == Termination::Contradiction;
        info!(
            proved,
            ?termination,
            steps = self.stats.steps,
            clauses = self.stats.clauses_kept,
            "proof attempt finished"
        );
        ProofOutcome {
            proved,
            termination,
            trace: self.trace,
            stats: self.stats,
        }
    }
}
