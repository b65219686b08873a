use super::*;

// =============================================================================
// CLAUSE FORM AND DUPLICATE KEYS
// =============================================================================

#[test]
fn empty_clause_renders_as_box() {
    assert_eq!(Clause::empty().to_string(), "◻");
    assert!(Clause::empty().is_empty());
    assert!(!Clause::empty().is_unit());
}

#[test]
fn literal_order_is_preserved() {
    let c = clause("B ∨ ¬A ∨ C(x, Y)");
    assert_eq!(c.to_string(), "B ∨ ¬A ∨ C(x, Y)");
    assert_eq!(c.literals[1], Literal::neg("A", vec![]));
}

#[test]
fn canonical_key_is_order_sensitive() {
    let ab = clause("A ∨ B");
    let ba = clause("B ∨ A");
    assert_ne!(DedupMode::Canonical.key(&ab), DedupMode::Canonical.key(&ba));
    assert_eq!(DedupMode::LiteralSet.key(&ab), DedupMode::LiteralSet.key(&ba));
}

#[test]
fn literal_set_key_ignores_repeats() {
    assert_eq!(
        DedupMode::LiteralSet.key(&clause("A ∨ B ∨ A")),
        DedupMode::LiteralSet.key(&clause("B ∨ A"))
    );
}

#[test]
fn variable_names_distinguish_clauses() {
    // Keys are textual, so renamed variables are different clauses.
    let px = clause("P(x)");
    let py = clause("P(y)");
    assert_ne!(DedupMode::Canonical.key(&px), DedupMode::Canonical.key(&py));
    assert_ne!(DedupMode::LiteralSet.key(&px), DedupMode::LiteralSet.key(&py));
}

#[test]
fn dedup_keeps_first_occurrence() {
    let c = Clause::new(vec![
        Literal::pos("B", vec![]),
        Literal::pos("A", vec![]),
        Literal::pos("B", vec![]),
    ])
    .dedup();
    assert_eq!(c.to_string(), "B ∨ A");
    assert!(!c.has_duplicates());
}

#[test]
fn reparsing_a_rendered_clause_is_stable() {
    for formula in [
        "∀x (Человек(x) → Смертен(x))",
        "A ∨ ¬B ∨ C",
        "P(a, B) → Q(a)",
        "¬R",
    ] {
        let once = clause(formula);
        let twice = clause(&once.to_string());
        assert_eq!(once, twice, "re-parse changed '{}'", formula);
    }
}
