//! Syntax types for first-order logic terms, literals, and clauses.

mod clause;
mod literal;
mod signature;
mod term;

pub use clause::{Clause, EMPTY_CLAUSE};
pub use literal::{Atom, Literal};
pub use signature::Signature;
pub use term::{is_variable_name, Constant, Term, Var};
