//! Clauses: disjunctions of literals.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::literal::Literal;
use crate::unify::Substitution;

/// Rendering of the empty clause.
pub const EMPTY_CLAUSE: &str = "◻";

/// A clause is a disjunction of literals.
///
/// Literals are kept in insertion order so that traces are reproducible,
/// although the clause is semantically a set.
///
/// Examples (in the surface syntax):
/// - Unit clause: `Человек(Сократ)`
/// - Binary: `¬Человек(x) ∨ Смертен(x)`
/// - Empty clause: `◻` (contradiction)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clause {
    pub literals: Vec<Literal>,
}

impl Clause {
    /// Create a clause from a vector of literals.
    pub fn new(literals: Vec<Literal>) -> Self {
        Clause { literals }
    }

    /// Create the empty clause (represents contradiction/false).
    pub fn empty() -> Self {
        Clause {
            literals: Vec::new(),
        }
    }

    /// Check if this is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Check if this is a unit clause (exactly one literal).
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// Get the number of literals in this clause.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Apply a substitution to every literal of this clause.
    pub fn apply_subst(&self, subst: &Substitution) -> Clause {
        if subst.is_empty() {
            return self.clone();
        }
        Clause::new(self.literals.iter().map(|l| l.apply_subst(subst)).collect())
    }

    /// Drop repeated literals, keeping the first occurrence of each.
    pub fn dedup(mut self) -> Clause {
        let mut seen = HashSet::new();
        self.literals.retain(|lit| seen.insert(lit.clone()));
        self
    }

    /// Check whether any literal occurs twice.
    pub fn has_duplicates(&self) -> bool {
        let mut seen = HashSet::new();
        !self.literals.iter().all(|lit| seen.insert(lit))
    }

    /// Canonical string form: literals joined by ` ∨ `, or `◻` when empty.
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    /// Order-insensitive key: the sorted set of rendered literals.
    pub fn literal_set_key(&self) -> String {
        let mut rendered: Vec<String> = self.literals.iter().map(ToString::to_string).collect();
        rendered.sort();
        rendered.dedup();
        rendered.join(" ∨ ")
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "{}", EMPTY_CLAUSE);
        }
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}
