//! Resolution-refutation prover.
//!
//! The prover parses formulas into clauses, then repeatedly resolves a pivot
//! clause against the working set until it derives the empty clause `◻`,
//! runs out of clauses, or exhausts its step budget:
//!
//! - unit clauses are preferred as pivots, and derived units jump the queue
//! - a non-unit pivot is only compared with unit clauses when any exist
//! - resolvents already present in the working set are dropped
//!
//! Every significant action is recorded in a numbered [`ProofTrace`].

mod clause_set;
mod config;
mod derivation;
mod resolution;
mod trace;

pub use clause_set::ClauseSet;
pub use config::{ConfigError, DedupMode, PairSelection, ProverConfig, DEFAULT_MAX_STEPS};
pub use derivation::{ProofOutcome, ProofStats, Prover, Termination};
pub use resolution::{resolve, resolve_all, Resolvent};
pub use trace::{ProofTrace, TraceEvent, TraceStep};
