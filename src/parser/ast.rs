//! Surface shapes of a formula in the supported fragment.

/// Negation marker.
pub const NOT: char = '¬';
/// Disjunction connective.
pub const OR: char = '∨';
/// Implication connective.
pub const IMPLIES: char = '→';
/// Universal quantifier marker.
pub const FORALL: char = '∀';

/// The outermost shape of a (trimmed) formula, borrowed from its source text.
///
/// Shapes are recognized textually and in this order of precedence:
/// quantifier prefix, implication, disjunction, single literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Surface<'a> {
    /// `∀x( body )`
    Quantified { body: &'a str },
    /// `antecedent → consequent`
    Implication {
        antecedent: &'a str,
        consequent: &'a str,
    },
    /// `l1 ∨ l2 ∨ ...`, split on every connective with no nesting.
    Disjunction(Vec<&'a str>),
    /// Anything else.
    Literal(&'a str),
}
