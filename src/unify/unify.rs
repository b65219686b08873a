//! Unification of flat argument lists.
//!
//! Two algorithms are provided. [`unify`] is the single-pass unifier the
//! prover uses by default: it walks the argument pairs once, never applies
//! earlier bindings to later pairs and performs no occurs-check. It rejects
//! some unifiable inputs (`[x, x]` against `[A, A]`) and, when the two sides
//! share variables, can return a substitution that is not a unifier
//! (`[x, y]` against `[y, A]`). Proof traces depend on this behavior.
//!
//! [`unify_complete`] resolves every argument through the bindings built so
//! far before comparing, and normalizes its result, so a returned
//! substitution always unifies both lists.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Substitution;
use crate::syntax::{Term, Var};

/// Which unification algorithm the resolver uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnifierMode {
    /// Single left-to-right pass without chained bindings.
    #[default]
    SinglePass,
    /// Chain-following unifier; succeeds on a superset of inputs.
    Complete,
}

impl std::str::FromStr for UnifierMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single_pass" | "single-pass" => Ok(UnifierMode::SinglePass),
            "complete" => Ok(UnifierMode::Complete),
            other => Err(format!("unknown unifier mode '{}'", other)),
        }
    }
}

impl std::fmt::Display for UnifierMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnifierMode::SinglePass => write!(f, "single_pass"),
            UnifierMode::Complete => write!(f, "complete"),
        }
    }
}

/// Reasons why unification can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnifyError {
    /// The argument lists have different lengths.
    #[error("argument lists differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
    /// Two distinct constants meet at the same position.
    #[error("cannot unify constants {left} and {right}")]
    ConstantClash { left: Term, right: Term },
    /// Both sides are variables that are already bound, or a bound variable meets a constant.
    #[error("{left} and {right} would need conflicting bindings")]
    ConflictingBinding { left: Term, right: Term },
}

/// Single-pass unification of two argument lists.
pub fn unify(args1: &[Term], args2: &[Term]) -> Result<Substitution, UnifyError> {
    check_lengths(args1, args2)?;

    let mut subst = Substitution::empty();
    for (a1, a2) in args1.iter().zip(args2) {
        if a1 == a2 {
            continue;
        }
        if let Some(var) = unbound_var(a1, &subst) {
            subst.bind(var.clone(), a2.clone());
        } else if let Some(var) = unbound_var(a2, &subst) {
            subst.bind(var.clone(), a1.clone());
        } else if a1.is_var() || a2.is_var() {
            return Err(UnifyError::ConflictingBinding {
                left: a1.clone(),
                right: a2.clone(),
            });
        } else {
            return Err(UnifyError::ConstantClash {
                left: a1.clone(),
                right: a2.clone(),
            });
        }
    }
    Ok(subst)
}

/// Chain-following unification of two argument lists.
///
/// Terms are flat, so a variable can never occur inside the term it is
/// bound to and no occurs-check is needed.
pub fn unify_complete(args1: &[Term], args2: &[Term]) -> Result<Substitution, UnifyError> {
    check_lengths(args1, args2)?;

    let mut subst = Substitution::empty();
    for (a1, a2) in args1.iter().zip(args2) {
        let r1 = subst.walk(a1);
        let r2 = subst.walk(a2);
        if r1 == r2 {
            continue;
        }
        match (&r1, &r2) {
            (Term::Var(var), _) => subst.bind(var.clone(), r2.clone()),
            (_, Term::Var(var)) => subst.bind(var.clone(), r1.clone()),
            _ => return Err(UnifyError::ConstantClash { left: r1, right: r2 }),
        }
    }
    Ok(subst.normalized())
}

/// Unify with the selected algorithm.
pub fn unify_with(
    mode: UnifierMode,
    args1: &[Term],
    args2: &[Term],
) -> Result<Substitution, UnifyError> {
    match mode {
        UnifierMode::SinglePass => unify(args1, args2),
        UnifierMode::Complete => unify_complete(args1, args2),
    }
}

fn check_lengths(args1: &[Term], args2: &[Term]) -> Result<(), UnifyError> {
    if args1.len() != args2.len() {
        return Err(UnifyError::LengthMismatch {
            left: args1.len(),
            right: args2.len(),
        });
    }
    Ok(())
}

fn unbound_var<'a>(term: &'a Term, subst: &Substitution) -> Option<&'a Var> {
    term.as_var().filter(|var| !subst.is_bound(var))
}
