//! The error taxonomy for grammar construction, augmentation and validation.

use crate::symbol::Symbol;
use thiserror::Error;

/// Errors raised while building or structurally checking a [`Grammar`](crate::grammar::Grammar).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GrammarError {
    #[error("no rules were supplied; a grammar needs at least one production")]
    EmptyRules,

    #[error("grammar has no terminals")]
    EmptyTerminals,

    #[error("grammar has no non-terminals")]
    EmptyNonTerminals,

    #[error("duplicate terminal `{0}`")]
    DuplicateTerminal(Symbol),

    #[error("duplicate non-terminal `{0}`")]
    DuplicateNonTerminal(Symbol),

    #[error("symbol `{0}` is classified as both a terminal and a non-terminal")]
    OverlapBetweenSets(Symbol),

    #[error("rule lhs `{0}` is classified as a terminal")]
    LhsIsTerminal(Symbol),

    #[error("rule lhs `{0}` is not classified as a non-terminal")]
    LhsIsNotNonTerminal(Symbol),

    #[error("rule `{rule}` references unknown symbol `{symbol}` on its right-hand side")]
    UnknownSymbolInRhs { rule: String, symbol: Symbol },

    #[error("start symbol `{0}` does not appear as the lhs of any rule")]
    StartSymbolNotFoundInRules(Symbol),

    #[error("start symbol `{0}` is not classified as a non-terminal")]
    StartSymbolIsNotNonTerminal(Symbol),

    #[error("non-terminal `{0}` is unreachable from the start symbol")]
    UnreachableNonTerminal(Symbol),

    #[error("non-terminal `{0}` is non-productive (every rule recurses without a terminating alternative)")]
    NonProductiveNonTerminal(Symbol),

    #[error("grammar is not augmented; call Builder::to_augmented_grammar first")]
    GrammarIsNotAugmented,

    #[error("grammar is already augmented")]
    AlreadyAugmented,
}

/// Errors raised while validating an LR(0) automaton for conflicts.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("shift/reduce conflict in state {state} on symbol `{symbol}`")]
    ShiftReduceConflict { state: usize, symbol: Symbol },

    #[error("reduce/reduce conflict in state {state} on symbol `{symbol}`")]
    ReduceReduceConflict { state: usize, symbol: Symbol },
}

pub type Result<T, E = GrammarError> = std::result::Result<T, E>;
