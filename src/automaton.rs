//! The canonical LR(0) characteristic finite-state machine: `CLOSURE`,
//! `GOTO`, and the state-dedup worklist that ties them together.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use indexmap::IndexSet;

use crate::debug::{log, logn};
use crate::error::{GrammarError, Result};
use crate::grammar::Grammar;
use crate::index::{RuleId, StateId, StateVec};
use crate::item::Item;
use crate::state::State;
use crate::symbol::Symbol;

/// The canonical LR(0) automaton over an augmented grammar: a deduplicated
/// list of states plus the transitions discovered while building them.
#[derive(Debug, Clone)]
pub struct Automaton {
    grammar: Grammar,
    states: StateVec<State>,
}

impl Automaton {
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn states(&self) -> &StateVec<State> {
        &self.states
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    /// Builds the automaton. `grammar` must already be augmented (the
    /// augmented rule `S' -> S` at `rules[0]` seeds the initial item); pass
    /// it the result of [`Builder::to_augmented_grammar`](crate::grammar::Builder::to_augmented_grammar).
    pub fn build(grammar: Grammar) -> Result<Self> {
        if !grammar.is_augmented() {
            return Err(GrammarError::GrammarIsNotAugmented);
        }

        let start_item = Item::start(&grammar, RuleId(0));
        let initial_items = Self::closure(&grammar, [start_item]);

        let mut states: StateVec<State> = StateVec::new();
        let mut seen: std::collections::HashMap<ItemSetKey, StateId> =
            std::collections::HashMap::new();

        let initial_id = states.push(State::new(StateId(0), initial_items.clone()));
        seen.insert(ItemSetKey(initial_items), initial_id);

        let mut i = 0;
        while i < states.len() {
            let current_id = StateId(i);
            let current_items: Vec<Item> = states[current_id].items().copied().collect();

            // Unique dot-symbols, preserving first-occurrence order.
            let mut dot_symbols: IndexSet<Symbol> = IndexSet::new();
            for item in &current_items {
                if let Some(symbol) = item.dot_symbol(&grammar) {
                    dot_symbols.insert(symbol.clone());
                }
            }

            for symbol in dot_symbols {
                let goto_items = Self::goto(&grammar, &current_items, &symbol);
                let key = ItemSetKey(goto_items.clone());

                let target_id = if let Some(&existing) = seen.get(&key) {
                    existing
                } else {
                    let new_id = StateId(states.len());
                    states.push(State::new(new_id, goto_items));
                    seen.insert(key, new_id);
                    new_id
                };

                log!(
                    "transition: state {} -- {} --> state {}",
                    current_id.0,
                    symbol,
                    target_id.0
                );
                states[current_id].add_transition(symbol, target_id);
            }

            i += 1;
        }

        Ok(Self { grammar, states })
    }

    /// `CLOSURE(I)`: the least item set containing `I`, closed under "for
    /// `A -> alpha . B beta` with `B` a non-terminal, include `B -> . gamma`
    /// for each `B`-rule". Processes items in insertion order so the result
    /// is deterministic; each non-terminal is expanded at most once.
    pub fn closure(grammar: &Grammar, seed: impl IntoIterator<Item = Item>) -> IndexSet<Item> {
        let mut items: IndexSet<Item> = seed.into_iter().collect();
        let mut expanded: HashSet<Symbol> = HashSet::new();
        logn!("computing closure of {} seed item(s) -- ", items.len());

        let mut i = 0;
        while i < items.len() {
            let item = *items.get_index(i).expect("index within bounds");
            if let Some(symbol) = item.dot_symbol(grammar) {
                if grammar.is_non_terminal(symbol) && expanded.insert(symbol.clone()) {
                    for (rule_id, _) in grammar.rules_for(symbol) {
                        items.insert(Item::start(grammar, rule_id));
                    }
                }
            }
            i += 1;
        }

        log!("closed to {} item(s)", items.len());
        items
    }

    /// `GOTO(I, X)`: advance every incomplete item of `I` whose dot-symbol is
    /// `X`, then take the closure of the result.
    pub fn goto(grammar: &Grammar, items: &[Item], symbol: &Symbol) -> IndexSet<Item> {
        let advanced = items
            .iter()
            .filter(|item| item.dot_symbol(grammar) == Some(symbol))
            .map(|item| item.advance(grammar));
        Self::closure(grammar, advanced)
    }
}

/// Wraps an item set so it can key a `HashMap` by structural identity,
/// independent of insertion order -- mirroring the spec's "set of distinct
/// item sets" `seen` collection.
struct ItemSetKey(IndexSet<Item>);

impl PartialEq for ItemSetKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().all(|i| other.0.contains(i))
    }
}
impl Eq for ItemSetKey {}

impl Hash for ItemSetKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-independent: combine per-item hashes with a commutative op
        // so permutations of the same set collide to the same hash.
        let mut acc: u64 = 0;
        for item in &self.0 {
            let mut h = std::collections::hash_map::DefaultHasher::new();
            item.hash(&mut h);
            acc = acc.wrapping_add(h.finish());
        }
        state.write_u64(acc);
    }
}
