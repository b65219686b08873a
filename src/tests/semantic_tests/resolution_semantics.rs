use super::*;

// =============================================================================
// BINARY RESOLUTION
// =============================================================================

// -------------------------------------------------------------------------
// Property: the resolvent drops exactly the resolved pair
// -------------------------------------------------------------------------
#[test]
fn resolvent_keeps_side_literals_in_parent_order() {
    let r = resolve(
        &clause("A ∨ B ∨ C"),
        &clause("D ∨ ¬B ∨ E"),
        UnifierMode::SinglePass,
    )
    .unwrap();
    assert_eq!((r.left_index, r.right_index), (1, 1));
    assert_eq!(r.clause.to_string(), "A ∨ C ∨ D ∨ E");
}

#[test]
fn modus_ponens() {
    let r = resolve(
        &clause("Человек(Сократ)"),
        &clause("∀x (Человек(x) → Смертен(x))"),
        UnifierMode::SinglePass,
    )
    .unwrap();
    assert_eq!(r.clause.to_string(), "Смертен(Сократ)");
}

#[test]
fn polarity_must_differ() {
    assert!(resolve(&clause("P(A)"), &clause("P(x)"), UnifierMode::Complete).is_none());
    assert!(resolve(&clause("¬P(A)"), &clause("¬P(x)"), UnifierMode::Complete).is_none());
}

#[test]
fn arity_mismatch_blocks_resolution() {
    assert!(resolve(&clause("P(A)"), &clause("¬P(A, B)"), UnifierMode::Complete).is_none());
}

// -------------------------------------------------------------------------
// Property: no resolvent contains two identical literals
// -------------------------------------------------------------------------
#[test]
fn shared_side_literal_appears_once() {
    let r = resolve(&clause("Q ∨ P"), &clause("¬P ∨ Q"), UnifierMode::SinglePass).unwrap();
    assert_eq!(r.clause.to_string(), "Q");
}

#[test]
fn substitution_induced_repeats_merge() {
    let r = resolve(
        &clause("R(x) ∨ P(x)"),
        &clause("¬P(C) ∨ R(C)"),
        UnifierMode::SinglePass,
    )
    .unwrap();
    assert_eq!(r.clause.to_string(), "R(C)");
}

// -------------------------------------------------------------------------
// Pair selection
// -------------------------------------------------------------------------
#[test]
fn first_match_is_the_head_of_all_matches() {
    let c1 = clause("P(x) ∨ Q(x)");
    let c2 = clause("¬Q(A) ∨ ¬P(B)");
    let first = resolve(&c1, &c2, UnifierMode::SinglePass).unwrap();
    let all = resolve_all(&c1, &c2, UnifierMode::SinglePass);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], first);
    assert_eq!(first.clause.to_string(), "Q(B) ∨ ¬Q(A)");
    assert_eq!(all[1].clause.to_string(), "P(A) ∨ ¬P(B)");
}

#[test]
fn no_complementary_pair_gives_nothing() {
    assert!(resolve_all(&clause("P(A)"), &clause("Q(A)"), UnifierMode::SinglePass).is_empty());
}
