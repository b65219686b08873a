//! Substitution: mapping variables to terms.

use crate::syntax::{Term, Var};
use std::collections::HashMap;
use std::fmt;

/// A substitution mapping variables to terms.
///
/// A substitution σ = {x₁ → t₁, ..., xₙ → tₙ} maps variables to terms.
/// Application is a single pass: a binding's right-hand side is not itself
/// rewritten, so `{x → y, y → A}` sends `x` to `y`, not to `A`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution {
    bindings: HashMap<Var, Term>,
}

impl Substitution {
    /// Create an empty substitution (identity).
    pub fn empty() -> Self {
        Substitution {
            bindings: HashMap::new(),
        }
    }

    /// Add a binding to this substitution.
    pub fn bind(&mut self, var: Var, term: Term) {
        self.bindings.insert(var, term);
    }

    /// Look up a variable in this substitution.
    pub fn lookup(&self, var: &Var) -> Option<&Term> {
        self.bindings.get(var)
    }

    pub fn is_bound(&self, var: &Var) -> bool {
        self.bindings.contains_key(var)
    }

    /// Apply this substitution to a term.
    pub fn apply_to_term(&self, term: &Term) -> Term {
        match term {
            Term::Var(var) => match self.bindings.get(var) {
                Some(t) => t.clone(),
                None => term.clone(),
            },
            Term::Const(_) => term.clone(),
        }
    }

    /// Apply this substitution to each term of an argument list.
    pub fn apply_to_terms(&self, terms: &[Term]) -> Vec<Term> {
        terms.iter().map(|t| self.apply_to_term(t)).collect()
    }

    /// Follow bindings from `term` until reaching a constant or an unbound variable.
    pub fn walk(&self, term: &Term) -> Term {
        let mut current = term.clone();
        while let Term::Var(var) = &current {
            match self.bindings.get(var) {
                Some(next) => current = next.clone(),
                None => break,
            }
        }
        current
    }

    /// Rewrite every binding to point at the end of its chain.
    ///
    /// Only meaningful for acyclic binding sets, which is all the complete
    /// unifier ever builds.
    pub fn normalized(&self) -> Substitution {
        let bindings = self
            .bindings
            .keys()
            .map(|var| (var.clone(), self.walk(&Term::Var(var.clone()))))
            .collect();
        Substitution { bindings }
    }

    /// Check if this substitution is empty (has no bindings).
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<_> = self.bindings.iter().collect();
        pairs.sort();
        write!(f, "{{")?;
        for (i, (var, term)) in pairs.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} ↦ {}", var, term)?;
        }
        write!(f, "}}")
    }
}
