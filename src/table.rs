//! ACTION and GOTO table construction from an LR(0) automaton.

use std::fmt;

use crate::automaton::Automaton;
use crate::debug::log;
use crate::grammar::Grammar;
use crate::index::{RuleId, StateId};
use crate::item::ItemAction;

/// A single parser action: shift into a state, reduce by a rule, or accept.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Shift(StateId),
    Reduce(RuleId),
    Accept,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Shift(s) => write!(f, "s{}", s.0),
            Action::Reduce(r) => write!(f, "r{}", r.0),
            Action::Accept => write!(f, "acc"),
        }
    }
}

/// An ACTION table cell: empty, a single action, or a growable set of
/// distinct actions recorded for diagnostics (Open Question 3: widened
/// rather than capped at two).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell(Vec<Action>);

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_conflict(&self) -> bool {
        self.0.len() > 1
    }

    pub fn actions(&self) -> &[Action] {
        &self.0
    }

    /// The single action in this cell, or `None` if it is empty or a
    /// conflict.
    pub fn single(&self) -> Option<Action> {
        match self.0.as_slice() {
            [action] => Some(*action),
            _ => None,
        }
    }

    fn push(&mut self, action: Action) {
        if !self.0.contains(&action) {
            self.0.push(action);
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "-");
        }
        let rendered: Vec<String> = self.0.iter().map(|a| a.to_string()).collect();
        write!(f, "{}", rendered.join("/"))
    }
}

/// Dense ACTION (`n_states x n_terminals`, `$` included) and GOTO
/// (`n_states x (n_non_terminals - 1)`, the augmented `S'` column excluded)
/// tables built from an LR(0) automaton.
#[derive(Debug, Clone)]
pub struct ParsingTable {
    action: Vec<Vec<Cell>>,
    goto: Vec<Vec<Option<StateId>>>,
    n_terminals: usize,
    n_non_terminals: usize,
}

impl ParsingTable {
    /// Builds the table by walking every state's outgoing transitions
    /// (shifts and gotos) then every complete item (reduces and accept).
    pub fn build(automaton: &Automaton) -> Self {
        let grammar = automaton.grammar();
        let n_states = automaton.states().len();
        let n_terminals = grammar.terminals().len();
        let n_non_terminals = grammar.non_terminals().len() - 1; // exclude S'

        let mut action = vec![vec![Cell::default(); n_terminals]; n_states];
        let mut goto = vec![vec![None; n_non_terminals]; n_states];

        for state in automaton.states().iter() {
            let row = state.id.0;

            for transition in &state.transitions {
                if grammar.is_terminal(&transition.symbol) {
                    let col = grammar
                        .term_col(&transition.symbol)
                        .expect("transition symbol classified as terminal");
                    Self::write(&mut action[row][col], Action::Shift(transition.to));
                } else {
                    // Non-terminal columns exclude S' at index 0.
                    let col = grammar
                        .non_term_col(&transition.symbol)
                        .expect("transition symbol classified as non-terminal")
                        - 1;
                    goto[row][col] = Some(transition.to);
                }
            }

            for item in state.items() {
                if !item.is_complete(grammar) {
                    continue;
                }
                match item.action {
                    ItemAction::Accept => {
                        let eof_col = grammar
                            .term_col(&crate::symbol::Symbol::end_of_input())
                            .expect("augmented grammar always has $ as a terminal");
                        Self::write(&mut action[row][eof_col], Action::Accept);
                    }
                    ItemAction::Reduce => {
                        for col in 0..n_terminals {
                            Self::write(&mut action[row][col], Action::Reduce(item.rule));
                        }
                    }
                    ItemAction::Shift => unreachable!("complete item cannot be a shift"),
                }
            }
        }

        Self {
            action,
            goto,
            n_terminals,
            n_non_terminals,
        }
    }

    fn write(cell: &mut Cell, action: Action) {
        let was_empty = cell.is_empty();
        cell.push(action);
        if !was_empty {
            log!("conflict cell widened: {}", cell);
        }
    }

    pub fn n_states(&self) -> usize {
        self.action.len()
    }

    pub fn n_terminals(&self) -> usize {
        self.n_terminals
    }

    pub fn n_non_terminals(&self) -> usize {
        self.n_non_terminals
    }

    pub fn action(&self, state: StateId, terminal_col: usize) -> &Cell {
        &self.action[state.0][terminal_col]
    }

    /// `non_terminal_col` excludes the augmented `S'` column (column 0 of
    /// [`Grammar::non_terminals`](crate::grammar::Grammar::non_terminals)).
    pub fn goto(&self, state: StateId, non_terminal_col: usize) -> Option<StateId> {
        self.goto[state.0][non_terminal_col]
    }

    pub fn has_conflicts(&self) -> bool {
        self.action.iter().flatten().any(Cell::is_conflict)
    }

    pub fn display<'a, 'g>(&'a self, grammar: &'g Grammar) -> TableDisplay<'a, 'g> {
        TableDisplay {
            table: self,
            grammar,
        }
    }
}

pub struct TableDisplay<'a, 'g> {
    table: &'a ParsingTable,
    grammar: &'g Grammar,
}

impl fmt::Display for TableDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state")?;
        for terminal in self.grammar.terminals() {
            write!(f, "\t{}", terminal)?;
        }
        for non_terminal in self.grammar.non_terminals().iter().skip(1) {
            write!(f, "\t{}", non_terminal)?;
        }
        writeln!(f)?;

        for row in 0..self.table.n_states() {
            write!(f, "{}", row)?;
            for col in 0..self.table.n_terminals {
                write!(f, "\t{}", self.table.action(StateId(row), col))?;
            }
            for col in 0..self.table.n_non_terminals {
                match self.table.goto(StateId(row), col) {
                    Some(s) => write!(f, "\t{}", s.0)?,
                    None => write!(f, "\t-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
