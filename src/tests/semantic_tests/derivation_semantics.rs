use super::*;

// =============================================================================
// PROOF SEARCH
// =============================================================================

// -------------------------------------------------------------------------
// Reference problems
// -------------------------------------------------------------------------
#[test]
fn socrates_is_mortal() {
    let outcome = prove(&[
        "∀x (Человек(x) → Смертен(x))",
        "Человек(Сократ)",
        "¬Смертен(Сократ)",
    ]);
    assert!(outcome.proved);
    assert_eq!(
        messages(&outcome),
        vec![
            "Added clause: ¬Человек(x) ∨ Смертен(x)",
            "Added clause: Человек(Сократ)",
            "Added clause: ¬Смертен(Сократ)",
            "Resolution: Человек(Сократ) and ¬Человек(x) ∨ Смертен(x) -> Смертен(Сократ)",
            "Resolution: Смертен(Сократ) and ¬Смертен(Сократ) -> ◻",
            "Contradiction found! Proof complete.",
        ]
    );
    assert_eq!(outcome.stats.steps, 2);
}

#[test]
fn chain_through_two_disjunctions() {
    let outcome = prove(&["A ∨ B", "¬A ∨ C", "¬B ∨ C", "¬C"]);
    assert!(outcome.proved);
    assert_eq!(
        messages(&outcome)[4..],
        [
            "Resolution: ¬C and ¬A ∨ C -> ¬A",
            "Resolution: ¬C and ¬B ∨ C -> ¬B",
            "Resolution: ¬B and A ∨ B -> A",
            "Resolution: A and ¬A ∨ C -> C",
            "Resolution: A and ¬A -> ◻",
            "Contradiction found! Proof complete.",
        ]
    );
    assert_eq!(outcome.stats.steps, 3);
}

#[test]
fn unrelated_facts_exhaust_supply() {
    let outcome = prove(&["P(a)", "Q(b)"]);
    assert!(!outcome.proved);
    assert_eq!(outcome.termination, Termination::SupplyExhausted);
    assert_eq!(outcome.stats.resolvents_generated, 0);
}

#[test]
fn no_input_means_no_resolution() {
    let outcome = prove(&[]);
    assert!(!outcome.proved);
    assert_eq!(messages(&outcome), vec!["No usable clauses for the proof"]);
    assert_eq!(outcome.stats.steps, 0);
}

// -------------------------------------------------------------------------
// Property: the empty clause ends the search at once
// -------------------------------------------------------------------------
#[test]
fn contradiction_is_the_last_entry() {
    let outcome = prove(&["P(A)", "¬P(A)", "Q(A)", "¬Q(A)", "R ∨ S"]);
    assert!(outcome.proved);
    let lines = messages(&outcome);
    assert_eq!(lines.last().map(String::as_str), Some("Contradiction found! Proof complete."));
    assert_eq!(lines.iter().filter(|l| l.ends_with("-> ◻")).count(), 1);
}

// -------------------------------------------------------------------------
// Property: the step budget bounds the search
// -------------------------------------------------------------------------
#[test]
fn budget_counts_pivots() {
    let config = ProverConfig {
        max_steps: 2,
        ..ProverConfig::default()
    };
    let outcome = prove_with(config, &["A", "B", "C", "D"]);
    assert_eq!(outcome.termination, Termination::StepLimit);
    assert_eq!(outcome.stats.steps, 2);
    assert_eq!(
        messages(&outcome).last().map(String::as_str),
        Some("Step limit of 2 reached. No contradiction found.")
    );
}

#[test]
fn satisfiable_input_is_not_proved() {
    let outcome = prove(&["∀x (P(x) → Q(x))", "∀x (Q(x) → P(x))", "P(A)", "R"]);
    assert!(!outcome.proved);
    assert!(outcome.stats.steps <= 50);
}

#[test]
fn parse_errors_do_not_stop_the_proof() {
    let outcome = prove(&["A → B → C", "P(A)", "¬P(A)"]);
    assert!(outcome.proved);
    assert!(messages(&outcome)[0].starts_with("Failed to parse formula 'A → B → C': "));
}

#[test]
fn malformed_quantifiers_are_raw_literals() {
    let outcome = prove(&["∀x P(x)", "¬∀x P(x)"]);
    assert!(outcome.proved);
    assert_eq!(
        messages(&outcome),
        vec![
            "Added clause: ∀x P(x)",
            "Added clause: ¬∀x P(x)",
            "Resolution: ∀x P(x) and ¬∀x P(x) -> ◻",
            "Contradiction found! Proof complete.",
        ]
    );

    assert!(prove(&["∀X (P(X))", "¬∀X (P(X))"]).proved);
}

// -------------------------------------------------------------------------
// Configuration switches
// -------------------------------------------------------------------------
#[test]
fn complete_unifier_finds_more_proofs() {
    let formulas = ["P(x, x)", "¬P(A, A)"];
    assert!(!prove(&formulas).proved);

    let config = ProverConfig {
        unifier: UnifierMode::Complete,
        ..ProverConfig::default()
    };
    assert!(prove_with(config, &formulas).proved);
}

#[test]
fn all_pairs_produce_more_resolvents() {
    // One pivot, one partner, two complementary pairs.
    let formulas = ["A ∨ B", "¬A ∨ ¬B"];
    let one_step = ProverConfig {
        max_steps: 1,
        ..ProverConfig::default()
    };
    let first = prove_with(one_step.clone(), &formulas);
    let all = prove_with(
        ProverConfig {
            pair_selection: PairSelection::All,
            ..one_step
        },
        &formulas,
    );
    assert_eq!(first.stats.resolvents_generated, 1);
    assert_eq!(all.stats.resolvents_generated, 2);
    assert_eq!(
        messages(&all)[2..4],
        [
            "Resolution: A ∨ B and ¬A ∨ ¬B -> B ∨ ¬B",
            "Resolution: A ∨ B and ¬A ∨ ¬B -> A ∨ ¬A",
        ]
    );
}

#[test]
fn provers_do_not_share_state() {
    let prover = Prover::default();
    let first = prover.prove(&["P(A)", "¬P(A)"]);
    let second = prover.prove(&["P(A)", "¬P(A)"]);
    assert_eq!(first, second);
    assert_eq!(first.trace.steps()[0].number, 1);
}
