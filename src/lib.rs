//! Resolute: a small first-order resolution prover.
//!
//! Formulas in a restricted surface syntax (`¬`, `∨`, one `→`, one leading
//! `∀x`) are turned into clauses and refuted by binary resolution with the
//! unit-preference strategy. Every proof attempt yields a verdict and a
//! numbered, human-readable trace.

pub mod syntax;
pub mod unify;
pub mod parser;
pub mod prover;
pub mod session;
pub mod repl;
pub mod worker;
pub mod pipeline;
