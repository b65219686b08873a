//! Literals: signed atoms in first-order logic.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::term::Term;
use crate::unify::Substitution;

/// An atom (predicate application).
///
/// Examples:
/// - `Человек(Сократ)` - unary predicate
/// - `Родитель(x, y)` - binary predicate
/// - `A` - 0-ary predicate (proposition)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Atom {
    pub predicate: String,
    pub args: Vec<Term>,
}

impl Atom {
    pub fn new(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Atom {
            predicate: predicate.into(),
            args,
        }
    }

    /// Create a 0-ary atom (proposition).
    pub fn prop(predicate: impl Into<String>) -> Self {
        Atom::new(predicate, vec![])
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Apply a substitution to this atom.
    pub fn apply_subst(&self, subst: &Substitution) -> Atom {
        Atom {
            predicate: self.predicate.clone(),
            args: subst.apply_to_terms(&self.args),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.predicate)?;
        if !self.args.is_empty() {
            write!(f, "(")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// A literal is a signed atom.
///
/// - Positive literal: `Смертен(x)`
/// - Negative literal: `¬Смертен(x)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    /// True if positive, false if negated
    pub positive: bool,
    /// The underlying atom
    pub atom: Atom,
}

impl Literal {
    /// Create a positive literal.
    pub fn positive(atom: Atom) -> Self {
        Literal {
            positive: true,
            atom,
        }
    }

    /// Create a negative literal.
    pub fn negative(atom: Atom) -> Self {
        Literal {
            positive: false,
            atom,
        }
    }

    /// Create a positive literal from predicate and args.
    pub fn pos(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Literal::positive(Atom::new(predicate, args))
    }

    /// Create a negative literal from predicate and args.
    pub fn neg(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Literal::negative(Atom::new(predicate, args))
    }

    pub fn predicate(&self) -> &str {
        &self.atom.predicate
    }

    pub fn args(&self) -> &[Term] {
        &self.atom.args
    }

    /// Same predicate name, opposite sign. Arguments are left to the unifier.
    pub fn clashes_with(&self, other: &Literal) -> bool {
        self.positive != other.positive && self.atom.predicate == other.atom.predicate
    }

    /// Apply a substitution to this literal.
    pub fn apply_subst(&self, subst: &Substitution) -> Literal {
        Literal {
            positive: self.positive,
            atom: self.atom.apply_subst(subst),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.positive {
            write!(f, "¬")?;
        }
        write!(f, "{}", self.atom)
    }
}
