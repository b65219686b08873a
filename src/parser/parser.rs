//! Parser from formula strings to clauses.
//!
//! Implication and the quantifier are removed by textual rewriting:
//! `A → B` becomes the string `¬A ∨ B`, which is parsed again. The negation
//! therefore lands on the first disjunct of `A` only; this is the fragment's
//! documented meaning, not general negation.

use thiserror::Error;

use super::ast::{Surface, FORALL, IMPLIES, NOT, OR};
use crate::syntax::{is_variable_name, Atom, Clause, Literal, Term};

/// Reasons a formula is rejected outright.
///
/// Most malformed text is not an error: it degrades to a zero-argument
/// literal named by the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("formula is empty")]
    Empty,
    #[error("empty operand in '{0}'")]
    EmptyOperand(String),
    #[error("expected a single implication, found {count} in '{formula}'")]
    MultipleImplications { formula: String, count: usize },
}

/// Parse one formula into the clause it denotes.
pub fn parse_formula(formula: &str) -> Result<Clause, ParseError> {
    let formula = formula.trim();
    if formula.is_empty() {
        return Err(ParseError::Empty);
    }

    match classify(formula)? {
        Surface::Quantified { body } => parse_formula(body),
        Surface::Implication {
            antecedent,
            consequent,
        } => parse_formula(&format!("{}{} {} {}", NOT, antecedent, OR, consequent)),
        Surface::Disjunction(parts) => {
            let literals = parts
                .into_iter()
                .map(parse_literal)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Clause::new(literals))
        }
        Surface::Literal(text) => Ok(Clause::new(vec![parse_literal(text)?])),
    }
}

/// Parse a batch of formulas, keeping each formula's own result.
pub fn parse_formulas<S: AsRef<str>>(formulas: &[S]) -> Vec<Result<Clause, ParseError>> {
    formulas.iter().map(|f| parse_formula(f.as_ref())).collect()
}

/// Recognize the outermost shape of a trimmed, non-empty formula.
pub fn classify(formula: &str) -> Result<Surface<'_>, ParseError> {
    if let Some(rest) = formula.strip_prefix(FORALL) {
        // A malformed prefix keeps `→` as literal text.
        return match quantified_body(rest) {
            Some(body) => Ok(Surface::Quantified { body }),
            None => classify_connectives(formula),
        };
    }

    if formula.contains(IMPLIES) {
        let (antecedent, consequent) = split_implication(formula)?;
        return Ok(Surface::Implication {
            antecedent,
            consequent,
        });
    }

    classify_connectives(formula)
}

fn classify_connectives(formula: &str) -> Result<Surface<'_>, ParseError> {
    if formula.contains(OR) {
        let parts: Vec<&str> = formula.split(OR).map(str::trim).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(ParseError::EmptyOperand(formula.to_string()));
        }
        return Ok(Surface::Disjunction(parts));
    }

    Ok(Surface::Literal(formula))
}

/// The non-empty body of `var ( body )`, where `var` is a variable name.
fn quantified_body(rest: &str) -> Option<&str> {
    let rest = rest.trim_start();
    let var_len = identifier_len(rest);
    if !is_variable_name(&rest[..var_len]) {
        return None;
    }

    let body = rest[var_len..]
        .trim_start()
        .strip_prefix('(')
        .and_then(|inner| inner.rfind(')').map(|close| &inner[..close]))?
        .trim();
    (!body.is_empty()).then_some(body)
}

fn split_implication(formula: &str) -> Result<(&str, &str), ParseError> {
    let count = formula.matches(IMPLIES).count();
    if count != 1 {
        return Err(ParseError::MultipleImplications {
            formula: formula.to_string(),
            count,
        });
    }
    let (left, right) = formula
        .split_once(IMPLIES)
        .ok_or_else(|| ParseError::EmptyOperand(formula.to_string()))?;
    let (left, right) = (left.trim(), right.trim());
    if left.is_empty() || right.is_empty() {
        return Err(ParseError::EmptyOperand(formula.to_string()));
    }
    Ok((left, right))
}

/// Parse a single literal: `[¬]Name` or `[¬]Name(arg, ...)`.
///
/// Text that does not start with `Name(` ... `)` becomes a zero-argument
/// predicate named by the whole text. Anything after the first `)` is
/// ignored.
pub fn parse_literal(text: &str) -> Result<Literal, ParseError> {
    let text = text.trim();
    let (positive, body) = match text.strip_prefix(NOT) {
        Some(rest) => (false, rest.trim()),
        None => (true, text),
    };
    if body.is_empty() {
        return Err(ParseError::EmptyOperand(text.to_string()));
    }

    let name_len = identifier_len(body);
    let (name, rest) = body.split_at(name_len);
    let args = rest
        .strip_prefix('(')
        .and_then(|inner| inner.find(')').map(|close| &inner[..close]))
        .filter(|_| !name.is_empty());

    let atom = match args {
        Some(args) => Atom::new(name, parse_args(args)),
        None => Atom::prop(body),
    };
    Ok(Literal { positive, atom })
}

fn parse_args(args: &str) -> Vec<Term> {
    if args.trim().is_empty() {
        return Vec::new();
    }
    args.split(',').map(|a| Term::from_token(a.trim())).collect()
}

/// Byte length of the identifier (letters, digits, `_`) at the start of `s`.
fn identifier_len(s: &str) -> usize {
    s.char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
