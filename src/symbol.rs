//! Grammar atoms.
//!
//! A [`Symbol`] is compared and hashed by name alone. Whether a given name is
//! a terminal or a non-terminal is not carried on the symbol itself -- it is
//! a property of the [`Grammar`](crate::grammar::Grammar) that contains it,
//! since the same name has no meaning outside of a grammar.

use std::borrow::Cow;
use std::fmt;

/// Name reserved for the augmented start non-terminal, introduced by
/// [`Builder::to_augmented_grammar`](crate::grammar::Builder::to_augmented_grammar).
pub const AUGMENTED_START_NAME: &str = "S'";

/// Name reserved for the end-of-input terminal, appended during augmentation.
pub const END_OF_INPUT_NAME: &str = "$";

/// Internal sentinel used by the validator to stand in for "no preceding
/// symbol", i.e. an item whose dot is at position 0. Never appears in a
/// grammar's terminal or non-terminal sets.
pub const EMPTY_SENTINEL_NAME: &str = "\u{3b5}";

/// A named grammar atom.
#[derive(Debug, Clone, Eq)]
pub struct Symbol(Cow<'static, str>);

impl Symbol {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn from_str(name: &str) -> Self {
        Self(Cow::Owned(name.to_owned()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// The reserved augmented-start non-terminal `S'`.
    pub fn augmented_start() -> Self {
        Self::new(AUGMENTED_START_NAME)
    }

    /// The reserved end-of-input terminal `$`.
    pub fn end_of_input() -> Self {
        Self::new(END_OF_INPUT_NAME)
    }

    /// The validator's empty-stack-top sentinel `ε`. Not a real grammar
    /// symbol; never inserted into a grammar's terminal or non-terminal sets.
    pub fn empty_sentinel() -> Self {
        Self::new(EMPTY_SENTINEL_NAME)
    }

    pub fn is_augmented_start(&self) -> bool {
        self.0 == AUGMENTED_START_NAME
    }

    pub fn is_end_of_input(&self) -> bool {
        self.0 == END_OF_INPUT_NAME
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::from_str(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
