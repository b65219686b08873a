//! Unification: computing substitutions that equate argument lists.

mod substitution;
mod unify;

pub use substitution::Substitution;
pub use unify::{unify, unify_complete, unify_with, UnifierMode, UnifyError};
