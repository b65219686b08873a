//! Binary resolution between two clauses.

use crate::syntax::Clause;
use crate::unify::{unify_with, Substitution, UnifierMode};

/// A clause derived by resolving two parents on one literal pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolvent {
    pub clause: Clause,
    /// Index of the resolved literal in the first parent.
    pub left_index: usize,
    /// Index of the resolved literal in the second parent.
    pub right_index: usize,
    pub substitution: Substitution,
}

impl Resolvent {
    pub fn is_empty(&self) -> bool {
        self.clause.is_empty()
    }
}

/// Resolve on the first complementary, unifiable literal pair.
///
/// Pairs are scanned with `c1` in the outer loop, both in clause order.
pub fn resolve(c1: &Clause, c2: &Clause, mode: UnifierMode) -> Option<Resolvent> {
    resolvents(c1, c2, mode).next()
}

/// Resolve on every complementary, unifiable literal pair, in scan order.
pub fn resolve_all(c1: &Clause, c2: &Clause, mode: UnifierMode) -> Vec<Resolvent> {
    resolvents(c1, c2, mode).collect()
}

fn resolvents<'a>(
    c1: &'a Clause,
    c2: &'a Clause,
    mode: UnifierMode,
) -> impl Iterator<Item = Resolvent> + 'a {
    c1.literals.iter().enumerate().flat_map(move |(i, l1)| {
        c2.literals
            .iter()
            .enumerate()
            .filter(move |(_, l2)| l1.clashes_with(l2))
            .filter_map(move |(j, l2)| {
                let sigma = unify_with(mode, l1.args(), l2.args()).ok()?;
                Some(Resolvent {
                    clause: build_resolvent(c1, i, c2, j, &sigma),
                    left_index: i,
                    right_index: j,
                    substitution: sigma,
                })
            })
    })
}

/// `c1` without literal `i`, then `c2` without literal `j` minus literals
/// already collected, all under `sigma`. Literals made identical by `sigma`
/// are merged afterwards.
fn build_resolvent(c1: &Clause, i: usize, c2: &Clause, j: usize, sigma: &Substitution) -> Clause {
    let mut literals: Vec<_> = c1
        .literals
        .iter()
        .enumerate()
        .filter(|(k, _)| *k != i)
        .map(|(_, lit)| lit.clone())
        .collect();

    for (k, lit) in c2.literals.iter().enumerate() {
        if k != j && !literals.contains(lit) {
            literals.push(lit.clone());
        }
    }

    Clause::new(literals).apply_subst(sigma).dedup()
}
