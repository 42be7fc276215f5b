//! Automaton states and the transitions between them.

use std::fmt;

use indexmap::IndexSet;

use crate::grammar::Grammar;
use crate::index::StateId;
use crate::item::Item;
use crate::symbol::Symbol;

/// An ordered set of items plus the outgoing transitions discovered from it.
///
/// Equality and hashing are defined over the *item set only*, ignoring `id`
/// and `transitions` -- two states with identical items are the same state
/// regardless of insertion order or which id they were provisionally
/// assigned, which is what lets the automaton builder deduplicate states.
#[derive(Debug, Clone)]
pub struct State {
    pub id: StateId,
    items: IndexSet<Item>,
    pub transitions: Vec<Transition>,
}

impl State {
    pub fn new(id: StateId, items: IndexSet<Item>) -> Self {
        Self {
            id,
            items,
            transitions: Vec::new(),
        }
    }

    /// Items in deterministic, first-insertion order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    pub fn add_transition(&mut self, symbol: Symbol, to: StateId) {
        debug_assert!(
            !self.transitions.iter().any(|t| t.symbol == symbol),
            "at most one outgoing transition per dot-symbol"
        );
        self.transitions.push(Transition {
            from: self.id,
            to,
            symbol,
        });
    }

    pub fn display<'a, 'g>(&'a self, grammar: &'g Grammar) -> StateDisplay<'a, 'g> {
        StateDisplay {
            state: self,
            grammar,
        }
    }
}

/// `(from, to, symbol)`: a single edge out of a state, keyed by the dot
/// symbol that triggered it. `from`/`to` are state ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
    pub symbol: Symbol,
}

/// Two states are equal, for dedup purposes, iff their item sets agree --
/// independent of iteration order, transitions, or id.
impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len() && self.items.iter().all(|i| other.items.contains(i))
    }
}
impl Eq for State {}

pub struct StateDisplay<'a, 'g> {
    state: &'a State,
    grammar: &'g Grammar,
}

impl fmt::Display for StateDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "State {}", self.state.id.0)?;
        for item in self.state.items() {
            writeln!(f, "  {}", item.display(self.grammar))?;
        }
        for transition in &self.state.transitions {
            writeln!(
                f,
                "  -- {} --> {}",
                transition.symbol, transition.to.0
            )?;
        }
        Ok(())
    }
}
