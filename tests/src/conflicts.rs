//! Shift/reduce, reduce/reduce, and widened conflict cells, driven through
//! the automaton and the table builder rather than the validator alone.

use lr0gen::{Automaton, Builder, ParsingTable, Rule, Settings, ValidationError, Validator};

#[test]
fn shift_reduce_conflict_surfaces_on_the_shared_lookahead() {
    // cycle -> id + id | factor ; factor -> ( cycle ) | id
    let grammar = Builder::from_rules(vec![
        Rule::new("cycle", vec!["id".into(), "+".into(), "id".into()]),
        Rule::new("cycle", vec!["factor".into()]),
        Rule::new("factor", vec!["(".into(), "cycle".into(), ")".into()]),
        Rule::new("factor", vec!["id".into()]),
    ])
    .unwrap()
    .to_augmented_grammar()
    .unwrap();
    let automaton = Automaton::build(grammar).unwrap();

    let conflicts = Validator::conflicts(&automaton, &Settings::default());
    assert!(conflicts.iter().any(|c| matches!(
        c,
        ValidationError::ShiftReduceConflict { symbol, .. } if symbol.name() == "id"
    )));
}

#[test]
fn reduce_reduce_conflict_surfaces_after_the_shared_prefix() {
    // S -> A | B ; A -> c ; B -> c
    let grammar = Builder::from_rules(vec![
        Rule::new("S", vec!["A".into()]),
        Rule::new("S", vec!["B".into()]),
        Rule::new("A", vec!["c".into()]),
        Rule::new("B", vec!["c".into()]),
    ])
    .unwrap()
    .to_augmented_grammar()
    .unwrap();
    let automaton = Automaton::build(grammar).unwrap();

    let conflicts = Validator::conflicts(&automaton, &Settings::default());
    assert!(conflicts.iter().any(|c| matches!(
        c,
        ValidationError::ReduceReduceConflict { symbol, .. } if symbol.name() == "c"
    )));
}

#[test]
fn three_way_reduce_conflict_widens_the_table_cell_instead_of_capping_at_two() {
    let grammar = Builder::from_rules(vec![
        Rule::new("S", vec!["A".into()]),
        Rule::new("S", vec!["B".into()]),
        Rule::new("S", vec!["C".into()]),
        Rule::new("A", vec!["x".into()]),
        Rule::new("B", vec!["x".into()]),
        Rule::new("C", vec!["x".into()]),
    ])
    .unwrap()
    .to_augmented_grammar()
    .unwrap();
    let automaton = Automaton::build(grammar).unwrap();
    let table = ParsingTable::build(&automaton);

    assert!(table.has_conflicts());
    let widest = (0..table.n_states())
        .flat_map(|row| {
            (0..table.n_terminals())
                .map(move |col| table.action(lr0gen::index::StateId(row), col))
        })
        .map(|cell| cell.actions().len())
        .max()
        .unwrap();
    assert!(widest >= 3, "expected a cell with 3+ widened actions, widest was {widest}");
}

#[test]
fn stop_at_first_conflict_yields_a_strict_prefix_of_full_validation() {
    let grammar = Builder::from_rules(vec![
        Rule::new("S", vec!["A".into()]),
        Rule::new("S", vec!["B".into()]),
        Rule::new("A", vec!["c".into()]),
        Rule::new("B", vec!["c".into()]),
    ])
    .unwrap()
    .to_augmented_grammar()
    .unwrap();
    let automaton = Automaton::build(grammar).unwrap();

    let full = Validator::validate_states(&automaton, &Settings::default());
    let short_circuited = Validator::validate_states(
        &automaton,
        &Settings {
            stop_at_first_conflict: true,
            ..Settings::default()
        },
    );

    assert!(short_circuited.len() <= full.len());
    assert!(short_circuited.last().unwrap().1.is_some());
}
