//! The classic Dragon Book expression grammar, end to end: build, augment,
//! construct the automaton, and emit a table.

use lr0gen::{Automaton, Builder, ParsingTable, Rule, Symbol};

fn rules() -> Vec<Rule> {
    vec![
        Rule::new("exp", vec!["exp".into(), "+".into(), "term".into()]),
        Rule::new("exp", vec!["term".into()]),
        Rule::new("term", vec!["term".into(), "*".into(), "factor".into()]),
        Rule::new("term", vec!["factor".into()]),
        Rule::new("factor", vec!["(".into(), "exp".into(), ")".into()]),
        Rule::new("factor", vec!["number".into()]),
    ]
}

#[test]
fn classifies_terminals_and_non_terminals_in_first_seen_order() {
    let grammar = Builder::from_rules(rules()).unwrap().build();
    assert_eq!(
        grammar.terminals(),
        &[
            Symbol::from("+"),
            Symbol::from("*"),
            Symbol::from("("),
            Symbol::from(")"),
            Symbol::from("number"),
        ]
    );
    assert_eq!(
        grammar.non_terminals(),
        &[Symbol::from("exp"), Symbol::from("term"), Symbol::from("factor")]
    );
}

#[test]
fn augmentation_adds_exactly_one_rule_terminal_and_non_terminal() {
    let unaugmented = Builder::from_rules(rules()).unwrap().build();
    let n_rules = unaugmented.rules().len();
    let n_terminals = unaugmented.terminals().len();
    let n_non_terminals = unaugmented.non_terminals().len();

    let augmented = Builder::from_rules(rules())
        .unwrap()
        .to_augmented_grammar()
        .unwrap();

    assert_eq!(augmented.rules().len(), n_rules + 1);
    assert_eq!(augmented.terminals().len(), n_terminals + 1);
    assert_eq!(augmented.non_terminals().len(), n_non_terminals + 1);
}

#[test]
fn builds_twelve_states_and_a_table_that_accepts_on_eof() {
    let grammar = Builder::from_rules(rules())
        .unwrap()
        .to_augmented_grammar()
        .unwrap();
    let automaton = Automaton::build(grammar.clone()).unwrap();
    assert_eq!(automaton.states().len(), 12);

    let table = ParsingTable::build(&automaton);
    assert_eq!(table.n_states(), 12);

    let eof_col = grammar.term_col(&Symbol::end_of_input()).unwrap();
    let accepts_somewhere = (0..table.n_states()).any(|row| {
        table.action(lr0gen::index::StateId(row), eof_col).single() == Some(lr0gen::Action::Accept)
    });
    assert!(accepts_somewhere);
}
