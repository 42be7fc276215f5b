//! Rejections raised before an automaton is ever built: empty rule lists and
//! a start symbol that doesn't line up with the rule set.

use lr0gen::{Builder, Grammar, GrammarError, GrammarValidator, Rule, Symbol};

#[test]
fn empty_rule_list_is_rejected_up_front() {
    assert_eq!(Builder::from_rules(vec![]).unwrap_err(), GrammarError::EmptyRules);
}

#[test]
fn start_symbol_absent_from_every_lhs_is_rejected() {
    let grammar = Grammar {
        start: Symbol::from("missing"),
        terminals: vec![Symbol::from("a")],
        non_terminals: vec![Symbol::from("missing"), Symbol::from("S")],
        rules: vec![Rule::new("S", vec!["a".into()])].into_iter().collect(),
        is_augmented: false,
    };
    assert_eq!(
        GrammarValidator::validate(&grammar).unwrap_err(),
        GrammarError::StartSymbolNotFoundInRules(Symbol::from("missing"))
    );
}

#[test]
fn start_symbol_classified_as_terminal_is_rejected() {
    let grammar = Grammar {
        start: Symbol::from("a"),
        terminals: vec![Symbol::from("a")],
        non_terminals: vec![Symbol::from("S")],
        rules: vec![
            Rule::new("S", vec!["a".into()]),
            Rule::new("a", vec!["a".into()]),
        ]
        .into_iter()
        .collect(),
        is_augmented: false,
    };
    assert_eq!(
        GrammarValidator::validate(&grammar).unwrap_err(),
        GrammarError::StartSymbolIsNotNonTerminal(Symbol::from("a"))
    );
}
