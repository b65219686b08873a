//! Argument terms: variables and constants.
//!
//! The supported fragment has no function symbols, so every term is flat.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A variable in first-order logic.
/// Variables are implicitly universally quantified and written with a lowercase first letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Var {
    name: String,
}

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Var { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A rigid constant symbol such as `Сократ` or `A`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Constant {
    name: String,
}

impl Constant {
    pub fn new(name: impl Into<String>) -> Self {
        Constant { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An argument of a predicate.
///
/// In the surface syntax:
/// - Variables: `x`, `y`, `person` (lowercase first letter)
/// - Constants: `Сократ`, `A`, `42` (anything else)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    /// A variable
    Var(Var),
    /// A constant
    Const(Constant),
}

impl Term {
    /// Create a variable term.
    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(Var::new(name))
    }

    /// Create a constant term.
    pub fn constant(name: impl Into<String>) -> Self {
        Term::Const(Constant::new(name))
    }

    /// Classify a bare token by the variable naming convention.
    pub fn from_token(token: &str) -> Self {
        if is_variable_name(token) {
            Term::var(token)
        } else {
            Term::constant(token)
        }
    }

    /// Textual name of the term, as written.
    pub fn name(&self) -> &str {
        match self {
            Term::Var(v) => v.name(),
            Term::Const(c) => c.name(),
        }
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    pub fn as_var(&self) -> Option<&Var> {
        match self {
            Term::Var(v) => Some(v),
            Term::Const(_) => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A bare token names a variable iff its first character is a lowercase letter.
pub fn is_variable_name(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_lowercase)
}
