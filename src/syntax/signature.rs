//! Signature (predicate arities) of an input clause set.

use std::collections::{BTreeMap, BTreeSet};

use super::Clause;

/// Arities observed for each predicate symbol.
///
/// The prover does not enforce arities; a predicate used with different
/// argument counts simply never unifies across them. The signature only
/// exists so that such input can be reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    pub predicates: BTreeMap<String, BTreeSet<usize>>,
}

impl Signature {
    pub fn empty() -> Self {
        Signature::default()
    }

    /// Record the predicates of a clause.
    pub fn add_clause(&mut self, clause: &Clause) {
        for lit in &clause.literals {
            self.predicates
                .entry(lit.atom.predicate.clone())
                .or_default()
                .insert(lit.atom.arity());
        }
    }

    /// Collect symbols from a set of clauses.
    pub fn from_clauses<'a>(clauses: impl IntoIterator<Item = &'a Clause>) -> Signature {
        let mut sig = Signature::empty();
        for clause in clauses {
            sig.add_clause(clause);
        }
        sig
    }

    /// Predicates used with more than one arity, with the arities seen.
    pub fn arity_conflicts(&self) -> Vec<(&str, Vec<usize>)> {
        self.predicates
            .iter()
            .filter(|(_, arities)| arities.len() > 1)
            .map(|(pred, arities)| (pred.as_str(), arities.iter().copied().collect()))
            .collect()
    }
}
