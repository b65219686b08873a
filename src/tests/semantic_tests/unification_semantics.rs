use super::*;

// =============================================================================
// UNIFICATION SEMANTIC PROPERTIES
// =============================================================================
//
// Arguments are flat: variables and constants only. A token is a variable
// exactly when its first character is lowercase.

// -------------------------------------------------------------------------
// Property: a returned substitution equates the two lists
//
// Holds for the complete unifier on all inputs, and for the single-pass
// unifier whenever no binding has to be chased through another variable.
// -------------------------------------------------------------------------
#[test]
fn unifier_equates_lists_ground_right() {
    let left = terms(&["x", "Анна", "y"]);
    let right = terms(&["Борис", "Анна", "Вера"]);
    let sigma = unify(&left, &right).unwrap();
    assert_eq!(sigma.apply_to_terms(&left), sigma.apply_to_terms(&right));
    assert_eq!(sigma.len(), 2);
}

#[test]
fn complete_unifier_chases_chains() {
    // x ↦ y, then y ↦ z, then z ↦ A: the result must send all three to A.
    let left = terms(&["x", "y", "z"]);
    let right = terms(&["y", "z", "A"]);
    let sigma = unify_complete(&left, &right).unwrap();
    assert_eq!(sigma.apply_to_terms(&left), terms(&["A", "A", "A"]));
    assert_eq!(sigma.apply_to_terms(&right), terms(&["A", "A", "A"]));
}

#[test]
fn complete_unifier_detects_indirect_clash() {
    // x meets A, then x (now A) meets B.
    assert!(unify_complete(&terms(&["x", "x"]), &terms(&["A", "B"])).is_err());
}

// -------------------------------------------------------------------------
// Property: the single-pass unifier is order-sensitive and chain-blind
// -------------------------------------------------------------------------
#[test]
fn single_pass_binds_left_variable_first() {
    let sigma = unify(&terms(&["x"]), &terms(&["y"])).unwrap();
    assert_eq!(sigma.lookup(&Var::new("x")), Some(&Term::var("y")));

    let sigma = unify(&terms(&["y"]), &terms(&["x"])).unwrap();
    assert_eq!(sigma.lookup(&Var::new("y")), Some(&Term::var("x")));
}

#[test]
fn single_pass_rejects_what_complete_accepts() {
    let left = terms(&["x", "x"]);
    let right = terms(&["A", "A"]);
    assert!(unify_with(UnifierMode::SinglePass, &left, &right).is_err());
    assert!(unify_with(UnifierMode::Complete, &left, &right).is_ok());
}

#[test]
fn identical_arguments_never_bind() {
    let args = terms(&["x", "y", "C"]);
    for mode in [UnifierMode::SinglePass, UnifierMode::Complete] {
        assert!(unify_with(mode, &args, &args).unwrap().is_empty());
    }
}

#[test]
fn zero_arity_unifies_trivially() {
    assert!(unify(&[], &[]).unwrap().is_empty());
}

#[test]
fn lowercase_cyrillic_is_a_variable() {
    let sigma = unify(&terms(&["человек"]), &terms(&["Сократ"])).unwrap();
    assert_eq!(
        sigma.lookup(&Var::new("человек")),
        Some(&Term::constant("Сократ"))
    );
}
