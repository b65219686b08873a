use super::*;
use crate::session::{ExecResult, Session, SessionError};

// =============================================================================
// SESSION BEHAVIOR
// =============================================================================

#[test]
fn formulas_accumulate_until_proved() {
    let mut session = Session::new();
    assert_eq!(
        session.add_formula("∀x (Человек(x) → Смертен(x))").unwrap(),
        ExecResult::FormulaAdded {
            index: 1,
            clause: "¬Человек(x) ∨ Смертен(x)".to_string()
        }
    );
    session.add_formula("Человек(Сократ)").unwrap();
    assert!(!session.prove().proved);

    session.add_formula("¬Смертен(Сократ)").unwrap();
    assert!(session.prove().proved);
    assert_eq!(session.formulas().len(), 3);
}

#[test]
fn rejected_formula_is_not_stored() {
    let mut session = Session::new();
    let err = session.add_formula("A → B → C").unwrap_err();
    assert!(matches!(err, SessionError::Parse { .. }));
    assert!(session.formulas().is_empty());
}

#[test]
fn settings_apply_to_the_next_proof() {
    let mut session = Session::new();
    session.add_formula("P(x, x)").unwrap();
    session.add_formula("¬P(A, A)").unwrap();
    assert!(!session.prove().proved);

    session.set_option("unifier", "complete").unwrap();
    assert!(session.prove().proved);
}

#[test]
fn bad_setting_keeps_previous_config() {
    let mut session = Session::with_config(ProverConfig {
        max_steps: 9,
        ..ProverConfig::default()
    });
    assert!(matches!(
        session.set_option("max_steps", "-1"),
        Err(SessionError::Config(_))
    ));
    assert_eq!(session.config().max_steps, 9);
}

#[test]
fn json_export_needs_an_outcome() {
    let mut session = Session::new();
    assert!(matches!(session.last_outcome_json(), Err(SessionError::NoOutcome)));

    session.add_formula("P(A)").unwrap();
    session.prove();
    let json = session.last_outcome_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["proved"], serde_json::json!(false));
    assert_eq!(value["termination"], serde_json::json!("supply_exhausted"));
}

#[test]
fn clear_forgets_formulas_and_outcome() {
    let mut session = Session::new();
    session.add_formula("P(A)").unwrap();
    session.prove();
    assert_eq!(session.clear(), ExecResult::Cleared { removed: 1 });
    assert!(session.formulas().is_empty());
    assert!(session.last_outcome().is_none());
}

#[test]
fn empty_session_proves_nothing() {
    let mut session = Session::new();
    let outcome = session.prove();
    assert_eq!(outcome.termination, Termination::NoClauses);
}
