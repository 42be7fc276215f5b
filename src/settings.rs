//! Ambient, non-grammar configuration of the generator pipeline.

/// Generator-wide toggles that do not change what a grammar *means*, only how
/// much diagnostic work the pipeline does around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// When `true`, [`Validator::validate_states`](crate::validator::Validator::validate_states)
    /// stops at the first state carrying a conflict instead of scanning every
    /// state in the automaton.
    pub stop_at_first_conflict: bool,

    /// When `true`, [`GrammarValidator::validate_structure`](crate::grammar::GrammarValidator::validate_structure)
    /// treats unreachable and non-productive non-terminals as hard errors
    /// rather than diagnostics collected alongside a successful result.
    pub strict_structural_checks: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stop_at_first_conflict: false,
            strict_structural_checks: false,
        }
    }
}
