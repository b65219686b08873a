use super::*;

// =============================================================================
// SUBSTITUTION APPLICATION
// =============================================================================

#[test]
fn application_is_single_pass() {
    let mut sigma = Substitution::empty();
    sigma.bind(Var::new("x"), Term::var("y"));
    sigma.bind(Var::new("y"), Term::constant("A"));
    assert_eq!(sigma.apply_to_term(&Term::var("x")), Term::var("y"));
    assert_eq!(sigma.walk(&Term::var("x")), Term::constant("A"));
}

#[test]
fn normalization_points_bindings_at_chain_ends() {
    let mut sigma = Substitution::empty();
    sigma.bind(Var::new("x"), Term::var("y"));
    sigma.bind(Var::new("y"), Term::constant("A"));
    let normal = sigma.normalized();
    assert_eq!(normal.lookup(&Var::new("x")), Some(&Term::constant("A")));
    assert_eq!(normal.lookup(&Var::new("y")), Some(&Term::constant("A")));
}

#[test]
fn constants_and_unbound_variables_are_fixed_points() {
    let mut sigma = Substitution::empty();
    sigma.bind(Var::new("x"), Term::constant("A"));
    assert_eq!(sigma.apply_to_term(&Term::constant("B")), Term::constant("B"));
    assert_eq!(sigma.apply_to_term(&Term::var("z")), Term::var("z"));
}

#[test]
fn clause_application_touches_every_literal() {
    let mut sigma = Substitution::empty();
    sigma.bind(Var::new("x"), Term::constant("Сократ"));
    let applied = clause("∀x (Человек(x) → Смертен(x))").apply_subst(&sigma);
    assert_eq!(applied.to_string(), "¬Человек(Сократ) ∨ Смертен(Сократ)");
}

#[test]
fn display_is_sorted() {
    let mut sigma = Substitution::empty();
    sigma.bind(Var::new("y"), Term::constant("B"));
    sigma.bind(Var::new("x"), Term::constant("A"));
    assert_eq!(sigma.to_string(), "{x ↦ A, y ↦ B}");
    assert_eq!(Substitution::empty().to_string(), "{}");
}
