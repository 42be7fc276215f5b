//! The grammar data model, its construction from a flat rule list, and the
//! augmentation transform that gives every grammar a unique accepting
//! configuration.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::debug::log;
use crate::error::{GrammarError, Result};
use crate::index::{RuleId, RuleVec};
use crate::rule::Rule;
use crate::settings::Settings;
use crate::symbol::Symbol;

/// `(start, terminals, non-terminals, rules, is_augmented)`.
///
/// See the crate-level invariants: terminals and non-terminals are disjoint,
/// every rhs symbol is classified, every rule's lhs is a non-terminal, and
/// the start symbol is a non-terminal with at least one rule.
///
/// Fields are public so callers with their own pre-classified grammar may
/// hand-assemble one directly, rather than going through the flat rule list
/// [`Builder::from_rules`] classifies. [`GrammarValidator::validate`] and
/// [`GrammarValidator::validate_structure`] check the invariants above
/// defensively for exactly this reason -- `from_rules` can't violate them by
/// construction, but a hand-assembled `Grammar` can.
#[derive(Debug, Clone)]
pub struct Grammar {
    pub start: Symbol,
    pub terminals: Vec<Symbol>,
    pub non_terminals: Vec<Symbol>,
    pub rules: RuleVec<Rule>,
    pub is_augmented: bool,
}

impl Grammar {
    pub fn start(&self) -> &Symbol {
        &self.start
    }

    pub fn terminals(&self) -> &[Symbol] {
        &self.terminals
    }

    pub fn non_terminals(&self) -> &[Symbol] {
        &self.non_terminals
    }

    pub fn rules(&self) -> &RuleVec<Rule> {
        &self.rules
    }

    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id]
    }

    pub fn rule_id(&self, rule: &Rule) -> Option<RuleId> {
        self.rules
            .iter()
            .position(|r| r == rule)
            .map(RuleId::from)
    }

    pub fn is_augmented(&self) -> bool {
        self.is_augmented
    }

    pub fn is_terminal(&self, symbol: &Symbol) -> bool {
        self.terminals.contains(symbol)
    }

    pub fn is_non_terminal(&self, symbol: &Symbol) -> bool {
        self.non_terminals.contains(symbol)
    }

    /// The column a terminal occupies in the ACTION table, or `None` if
    /// `symbol` is not one of this grammar's terminals.
    pub fn term_col(&self, symbol: &Symbol) -> Option<usize> {
        self.terminals.iter().position(|s| s == symbol)
    }

    /// The column a non-terminal occupies in `non_terminals`. Note this is
    /// *not* the GOTO table column directly: the augmented `S'` at index 0
    /// has no GOTO column (see [`crate::table::ParsingTable`]).
    pub fn non_term_col(&self, symbol: &Symbol) -> Option<usize> {
        self.non_terminals.iter().position(|s| s == symbol)
    }

    /// Rules whose lhs is `symbol`, in declaration order.
    pub fn rules_for<'a>(&'a self, symbol: &'a Symbol) -> impl Iterator<Item = (RuleId, &'a Rule)> + 'a {
        self.rules
            .iter()
            .enumerate()
            .filter(move |(_, r)| &r.lhs == symbol)
            .map(|(i, r)| (RuleId::from(i), r))
    }

    /// `rules[0]`, which augmentation always seeds as `S' -> S`.
    ///
    /// Fails with [`GrammarError::GrammarIsNotAugmented`] on a grammar that
    /// was never augmented.
    pub fn augmented_start_rule(&self) -> Result<&Rule> {
        if !self.is_augmented {
            return Err(GrammarError::GrammarIsNotAugmented);
        }
        Ok(&self.rules[RuleId(0)])
    }
}

/// Owning mutator that classifies symbols from a flat rule list and can
/// produce an augmented grammar. Each transform consumes and returns `Self`
/// (or a `Grammar`), so a builder can never be driven twice through the same
/// one-shot step.
pub struct Builder {
    grammar: Grammar,
}

impl Builder {
    /// Builds a grammar by scanning `rules` once: the set of lhs symbols
    /// becomes the non-terminals, and every other symbol seen on some rhs
    /// becomes a terminal, in first-occurrence order.
    ///
    /// `start` is the lhs of the first rule. Fails with
    /// [`GrammarError::EmptyRules`] when `rules` is empty.
    pub fn from_rules(rules: Vec<Rule>) -> Result<Self> {
        let first = rules.first().ok_or(GrammarError::EmptyRules)?;
        let start = first.lhs.clone();

        let lhs_set: HashSet<&Symbol> = rules.iter().map(|r| &r.lhs).collect();

        let mut non_terminals: IndexSet<Symbol> = IndexSet::new();
        let mut terminals: IndexSet<Symbol> = IndexSet::new();

        for rule in &rules {
            non_terminals.insert(rule.lhs.clone());
            for symbol in &rule.rhs {
                if lhs_set.contains(symbol) {
                    non_terminals.insert(symbol.clone());
                } else {
                    terminals.insert(symbol.clone());
                }
            }
        }

        log!(
            "from_rules: {} rules, {} terminals, {} non-terminals, start = {}",
            rules.len(),
            terminals.len(),
            non_terminals.len(),
            start
        );

        Ok(Self {
            grammar: Grammar {
                start,
                terminals: terminals.into_iter().collect(),
                non_terminals: non_terminals.into_iter().collect(),
                rules: rules.into_iter().collect(),
                is_augmented: false,
            },
        })
    }

    /// Builds a [`Builder`] directly from an already-classified [`Grammar`],
    /// for callers assembling a grammar by hand rather than from a flat rule
    /// list (e.g. tests exercising [`GrammarValidator`] directly).
    pub fn from_grammar(grammar: Grammar) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Consumes the builder, returning its grammar unaugmented.
    pub fn build(self) -> Grammar {
        self.grammar
    }

    /// A one-shot transform: inserts the augmented start non-terminal `S'`
    /// at non-terminal column 0, appends the end-of-input terminal `$`,
    /// inserts `S' -> S` as `rules[0]`, and marks the grammar augmented.
    ///
    /// Fails with [`GrammarError::AlreadyAugmented`] if called twice.
    pub fn to_augmented_grammar(mut self) -> Result<Grammar> {
        if self.grammar.is_augmented {
            return Err(GrammarError::AlreadyAugmented);
        }

        let prior_start = self.grammar.start.clone();

        self.grammar
            .non_terminals
            .insert(0, Symbol::augmented_start());
        self.grammar.terminals.push(Symbol::end_of_input());

        let augmented_rule = Rule::new(Symbol::augmented_start(), vec![prior_start]);

        let mut rules: Vec<Rule> = Vec::with_capacity(self.grammar.rules.len() + 1);
        rules.push(augmented_rule);
        rules.extend(self.grammar.rules.into_iter());
        self.grammar.rules = rules.into_iter().collect();

        self.grammar.start = Symbol::augmented_start();
        self.grammar.is_augmented = true;

        log!(
            "augmented grammar: {} rules, {} terminals, {} non-terminals",
            self.grammar.rules.len(),
            self.grammar.terminals.len(),
            self.grammar.non_terminals.len()
        );

        Ok(self.grammar)
    }
}

/// Structural checks over a [`Grammar`], split into a cheap core ([`validate`])
/// and a more expensive reachability/productivity pass
/// ([`validate_structure`]).
pub struct GrammarValidator;

impl GrammarValidator {
    /// Non-empty terminal set, non-empty non-terminal set, non-empty rule
    /// set, start symbol appears as some rule's lhs, start symbol is
    /// classified as a non-terminal.
    pub fn validate(grammar: &Grammar) -> Result<()> {
        if grammar.terminals.is_empty() {
            return Err(GrammarError::EmptyTerminals);
        }
        if grammar.non_terminals.is_empty() {
            return Err(GrammarError::EmptyNonTerminals);
        }
        if grammar.rules.is_empty() {
            return Err(GrammarError::EmptyRules);
        }
        if !grammar.rules.iter().any(|r| r.lhs == grammar.start) {
            return Err(GrammarError::StartSymbolNotFoundInRules(
                grammar.start.clone(),
            ));
        }
        if !grammar.is_non_terminal(&grammar.start) {
            return Err(GrammarError::StartSymbolIsNotNonTerminal(
                grammar.start.clone(),
            ));
        }
        Self::validate_sets_and_rules(grammar)?;
        Ok(())
    }

    /// Defensive checks against hand-assembled grammars: set overlap,
    /// duplicate entries, unknown rhs symbols, and lhs classification.
    /// Unreachable via [`Builder::from_rules`], which partitions the two
    /// sets disjointly and only ever inserts symbols that occur in some rule.
    fn validate_sets_and_rules(grammar: &Grammar) -> Result<()> {
        let mut seen_terminals = HashSet::new();
        for terminal in &grammar.terminals {
            if !seen_terminals.insert(terminal) {
                return Err(GrammarError::DuplicateTerminal(terminal.clone()));
            }
            if grammar.non_terminals.contains(terminal) {
                return Err(GrammarError::OverlapBetweenSets(terminal.clone()));
            }
        }

        let mut seen_non_terminals = HashSet::new();
        for non_terminal in &grammar.non_terminals {
            if !seen_non_terminals.insert(non_terminal) {
                return Err(GrammarError::DuplicateNonTerminal(non_terminal.clone()));
            }
        }

        for rule in &grammar.rules {
            if grammar.is_terminal(&rule.lhs) {
                return Err(GrammarError::LhsIsTerminal(rule.lhs.clone()));
            }
            if !grammar.is_non_terminal(&rule.lhs) {
                return Err(GrammarError::LhsIsNotNonTerminal(rule.lhs.clone()));
            }
            for symbol in &rule.rhs {
                if !grammar.is_terminal(symbol) && !grammar.is_non_terminal(symbol) {
                    return Err(GrammarError::UnknownSymbolInRhs {
                        rule: rule.to_string(),
                        symbol: symbol.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Reachability and productivity diagnostics. Returns every offending
    /// non-terminal as a diagnostic in `Ok(_)` unless
    /// `settings.strict_structural_checks` is set, in which case the first
    /// offender is returned as `Err(_)`.
    pub fn validate_structure(
        grammar: &Grammar,
        settings: &Settings,
    ) -> Result<Vec<GrammarError>> {
        let mut diagnostics = Vec::new();

        let reachable = Self::reachable_non_terminals(grammar);
        for non_terminal in &grammar.non_terminals {
            if non_terminal.is_augmented_start() {
                continue;
            }
            if !reachable.contains(non_terminal) {
                let error = GrammarError::UnreachableNonTerminal(non_terminal.clone());
                if settings.strict_structural_checks {
                    return Err(error);
                }
                diagnostics.push(error);
            }
        }

        let productive = Self::productive_non_terminals(grammar);
        for non_terminal in &grammar.non_terminals {
            if !productive.contains(non_terminal) {
                let error = GrammarError::NonProductiveNonTerminal(non_terminal.clone());
                if settings.strict_structural_checks {
                    return Err(error);
                }
                diagnostics.push(error);
            }
        }

        Ok(diagnostics)
    }

    /// Non-terminals reachable from `start` by following rule right-hand
    /// sides transitively.
    fn reachable_non_terminals(grammar: &Grammar) -> HashSet<Symbol> {
        let mut reachable: HashSet<Symbol> = HashSet::new();
        let mut frontier = vec![grammar.start.clone()];
        reachable.insert(grammar.start.clone());

        while let Some(symbol) = frontier.pop() {
            for (_, rule) in grammar.rules_for(&symbol) {
                for rhs_symbol in &rule.rhs {
                    if grammar.is_non_terminal(rhs_symbol) && reachable.insert(rhs_symbol.clone())
                    {
                        frontier.push(rhs_symbol.clone());
                    }
                }
            }
        }

        reachable
    }

    /// Non-terminals for which some rule's rhs consists entirely of
    /// terminals and/or already-known-productive non-terminals, computed to
    /// a least fixpoint.
    fn productive_non_terminals(grammar: &Grammar) -> HashSet<Symbol> {
        let mut productive: HashSet<Symbol> = HashSet::new();
        let mut changed = true;

        while changed {
            changed = false;
            for rule in &grammar.rules {
                if productive.contains(&rule.lhs) {
                    continue;
                }
                let is_productive = rule.rhs.iter().all(|symbol| {
                    grammar.is_terminal(symbol) || productive.contains(symbol)
                });
                if is_productive {
                    productive.insert(rule.lhs.clone());
                    changed = true;
                }
            }
        }

        productive
    }
}
