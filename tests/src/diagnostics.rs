//! Structural diagnostics that `validate` deliberately leaves to the
//! separate `validate_structure` pass: unreachable and non-productive
//! non-terminals.

use lr0gen::{Builder, GrammarError, GrammarValidator, Rule, Settings, Symbol};

#[test]
fn unreachable_and_non_productive_non_terminals_are_both_reported() {
    // S -> a ; Unused -> Unused b (reachable from nothing) ; Dead -> Dead (no terminating alternative)
    let grammar = Builder::from_rules(vec![
        Rule::new("S", vec!["a".into()]),
        Rule::new("Unused", vec!["Unused".into(), "b".into()]),
        Rule::new("Dead", vec!["Dead".into()]),
    ])
    .unwrap()
    .build();

    let diagnostics = GrammarValidator::validate_structure(&grammar, &Settings::default()).unwrap();

    assert!(diagnostics.contains(&GrammarError::UnreachableNonTerminal(Symbol::from("Unused"))));
    assert!(diagnostics.contains(&GrammarError::UnreachableNonTerminal(Symbol::from("Dead"))));
    assert!(diagnostics.contains(&GrammarError::NonProductiveNonTerminal(Symbol::from("Dead"))));
}

#[test]
fn strict_structural_checks_stop_at_the_first_offender() {
    let grammar = Builder::from_rules(vec![
        Rule::new("S", vec!["a".into()]),
        Rule::new("Dead", vec!["Dead".into()]),
    ])
    .unwrap()
    .build();

    let settings = Settings {
        strict_structural_checks: true,
        ..Settings::default()
    };
    assert!(GrammarValidator::validate_structure(&grammar, &settings).is_err());
}

#[test]
fn a_well_formed_grammar_has_no_structural_diagnostics() {
    let grammar = Builder::from_rules(vec![
        Rule::new("S", vec!["a".into(), "S".into(), "b".into()]),
        Rule::new("S", vec!["a".into(), "b".into()]),
    ])
    .unwrap()
    .build();

    let diagnostics = GrammarValidator::validate_structure(&grammar, &Settings::default()).unwrap();
    assert!(diagnostics.is_empty());
}
