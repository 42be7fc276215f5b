//! Per-state shift/reduce and reduce/reduce conflict detection over an
//! LR(0) automaton.

use indexmap::IndexMap;

use crate::automaton::Automaton;
use crate::error::ValidationError;
use crate::grammar::Grammar;
use crate::index::StateId;
use crate::item::ItemAction;
use crate::settings::Settings;
use crate::state::State;
use crate::symbol::Symbol;

/// One state's outcome from the validator: the state's id and, if the state
/// carries a conflict, the first one found while scanning its items.
pub type StateDiagnostic = (StateId, Option<ValidationError>);

/// Checks an automaton's states for LR(0) conflicts.
pub struct Validator;

impl Validator {
    /// Scans every state and returns one diagnostic per state, in state-id
    /// order. With `settings.stop_at_first_conflict`, the stream ends at the
    /// first conflicting state instead of covering the whole automaton.
    pub fn validate_states(automaton: &Automaton, settings: &Settings) -> Vec<StateDiagnostic> {
        let mut diagnostics = Vec::with_capacity(automaton.states().len());
        for state in automaton.states().iter() {
            let diagnostic = Self::validate_state(automaton.grammar(), state);
            let is_conflict = diagnostic.is_some();
            diagnostics.push((state.id, diagnostic));
            if is_conflict && settings.stop_at_first_conflict {
                break;
            }
        }
        diagnostics
    }

    /// Convenience over [`validate_states`](Self::validate_states): just the
    /// conflicts, dropping conflict-free states.
    pub fn conflicts(automaton: &Automaton, settings: &Settings) -> Vec<ValidationError> {
        Self::validate_states(automaton, settings)
            .into_iter()
            .filter_map(|(_, error)| error)
            .collect()
    }

    /// Groups items of `state` by pre-dot symbol (the `ε` sentinel for items
    /// at dot position 0). The first mismatch in action kind for a shared
    /// key is a shift/reduce conflict; two reduces sharing a key is a
    /// reduce/reduce conflict. Returns at most one diagnostic, the first
    /// found while scanning items in their deterministic state order.
    fn validate_state(grammar: &Grammar, state: &State) -> Option<ValidationError> {
        let mut seen: IndexMap<Symbol, ItemAction> = IndexMap::new();

        for item in state.items() {
            let key = item
                .pre_dot_symbol(grammar)
                .cloned()
                .unwrap_or_else(Symbol::empty_sentinel);

            match seen.get(&key) {
                None => {
                    seen.insert(key, item.action);
                }
                Some(&existing) if existing != item.action => {
                    return Some(ValidationError::ShiftReduceConflict {
                        state: state.id.0,
                        symbol: key,
                    });
                }
                Some(&existing) if existing == ItemAction::Reduce => {
                    return Some(ValidationError::ReduceReduceConflict {
                        state: state.id.0,
                        symbol: key,
                    });
                }
                _ => {}
            }
        }

        None
    }
}
