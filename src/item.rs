//! LR(0) items: a rule annotated with a dot position, plus a cached action
//! kind derived purely from that position.

use std::fmt;

use crate::grammar::Grammar;
use crate::index::RuleId;
use crate::symbol::Symbol;

/// The action an item implies once its dot reaches the position it holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ItemAction {
    /// The item is incomplete: the parser shifts `dot_symbol`.
    Shift,
    /// The item is complete and its lhs is the augmented start: parsing
    /// accepts.
    Accept,
    /// The item is complete and its lhs is any other non-terminal: the
    /// parser reduces by the item's rule.
    Reduce,
}

/// `(rule, dot_pos, action)`. Identity is `(rule, dot_pos)`; `action` is a
/// pure function of the two and does not affect equality or hashing.
#[derive(Debug, Copy, Clone, Eq)]
pub struct Item {
    pub rule: RuleId,
    pub dot_pos: usize,
    pub action: ItemAction,
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.rule == other.rule && self.dot_pos == other.dot_pos
    }
}

impl std::hash::Hash for Item {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.rule.hash(state);
        self.dot_pos.hash(state);
    }
}

impl Item {
    /// The initial item `(rule, 0)` for `rule`.
    pub fn start(grammar: &Grammar, rule: RuleId) -> Self {
        Self::at(grammar, rule, 0)
    }

    /// The item `(rule, dot_pos)`, with `action` recomputed from the
    /// grammar.
    pub fn at(grammar: &Grammar, rule: RuleId, dot_pos: usize) -> Self {
        let r = grammar.rule(rule);
        let action = if dot_pos < r.len() {
            ItemAction::Shift
        } else if r.lhs.is_augmented_start() {
            ItemAction::Accept
        } else {
            ItemAction::Reduce
        };
        Self {
            rule,
            dot_pos,
            action,
        }
    }

    pub fn is_complete(&self, grammar: &Grammar) -> bool {
        self.dot_pos >= grammar.rule(self.rule).len()
    }

    /// The symbol immediately after the dot, or `None` if the item is
    /// complete.
    pub fn dot_symbol<'g>(&self, grammar: &'g Grammar) -> Option<&'g Symbol> {
        grammar.rule(self.rule).rhs.get(self.dot_pos)
    }

    /// The symbol immediately before the dot, or `None` if `dot_pos == 0`
    /// (the validator substitutes the `ε` sentinel in that case).
    pub fn pre_dot_symbol<'g>(&self, grammar: &'g Grammar) -> Option<&'g Symbol> {
        if self.dot_pos == 0 {
            None
        } else {
            grammar.rule(self.rule).rhs.get(self.dot_pos - 1)
        }
    }

    /// The item with the dot advanced by one position, recomputing `action`.
    /// Panics if `self` is already complete; callers only advance items
    /// whose `dot_symbol` they have just consumed.
    pub fn advance(&self, grammar: &Grammar) -> Self {
        debug_assert!(!self.is_complete(grammar), "cannot advance a complete item");
        Self::at(grammar, self.rule, self.dot_pos + 1)
    }

    /// Renders as `[action] lhs -> s1 ... . si ...`.
    pub fn display<'g>(&self, grammar: &'g Grammar) -> ItemDisplay<'_, 'g> {
        ItemDisplay { item: self, grammar }
    }
}

pub struct ItemDisplay<'a, 'g> {
    item: &'a Item,
    grammar: &'g Grammar,
}

impl fmt::Display for ItemDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = self.grammar.rule(self.item.rule);
        let action = match self.item.action {
            ItemAction::Shift => "shift",
            ItemAction::Accept => "accept",
            ItemAction::Reduce => "reduce",
        };
        write!(f, "[{}] {} ->", action, rule.lhs)?;
        for (i, symbol) in rule.rhs.iter().enumerate() {
            if i == self.item.dot_pos {
                write!(f, " \u{2022}")?;
            }
            write!(f, " {}", symbol)?;
        }
        if self.item.dot_pos == rule.rhs.len() {
            write!(f, " \u{2022}")?;
        }
        Ok(())
    }
}
