//! Parser for the restricted formula syntax.
//!
//! Supported: literals `Name` / `Name(a, b)`, prefix `¬`, flat `∨`, a single
//! `→`, and one universal quantifier `∀x( ... )` around the whole formula.

mod ast;
mod parser;

pub use ast::{Surface, FORALL, IMPLIES, NOT, OR};
pub use parser::{classify, parse_formula, parse_formulas, parse_literal, ParseError};
