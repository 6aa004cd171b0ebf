use std::fmt::{Debug, Display};

use itertools::Itertools;

use crate::Show;

/// A symbol is the atomic building block of an [`Alphabet`]. It is nothing more than a
/// label, and two symbols are equal precisely if their labels are equal.
///
/// Symbols can be created from string slices, owned strings and single characters, which
/// makes it possible to write `Symbol::from('a')` as well as `Symbol::from("if")`.
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new symbol with the given label.
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self(label.into())
    }

    /// Returns the label of the symbol.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        Self(value.to_string())
    }
}

impl From<&Symbol> for Symbol {
    fn from(value: &Symbol) -> Self {
        value.clone()
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self.0)
    }
}

impl Show for Symbol {
    fn show(&self) -> String {
        self.0.clone()
    }
}

/// An alphabet is an ordered collection of distinct [`Symbol`]s. The order in which the
/// symbols are given is kept, but it is only used for display purposes (for example to
/// determine the column order of a transition table). It carries no semantic weight.
///
/// # Example
/// ```
/// use finite_automata::prelude::*;
///
/// let alphabet = Alphabet::from_iter(["a", "b", "a", "c"]);
/// assert_eq!(alphabet.len(), 3);
/// assert!(alphabet.contains(&Symbol::from('b')));
/// ```
#[derive(Clone, Hash, PartialEq, Eq, Default)]
pub struct Alphabet(Vec<Symbol>);

impl Alphabet {
    /// Creates a new alphabet from the given symbols. If a symbol appears more than once,
    /// only its first occurrence is kept.
    pub fn new<S: Into<Symbol>, I: IntoIterator<Item = S>>(symbols: I) -> Self {
        Self(symbols.into_iter().map(Into::into).unique().collect())
    }

    /// Returns true if the given symbol belongs to the alphabet.
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.0.contains(symbol)
    }

    /// Gives the position of `symbol` in the alphabet, or `None` if it is not contained.
    pub fn position(&self, symbol: &Symbol) -> Option<usize> {
        self.0.iter().position(|s| s == symbol)
    }

    /// Returns an iterator over the symbols, in the order in which they were given.
    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.0.iter()
    }

    /// The number of distinct symbols.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the alphabet has no symbols at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<Symbol>> FromIterator<S> for Alphabet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Alphabet {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.show())
    }
}

impl Show for Alphabet {
    fn show(&self) -> String {
        Symbol::show_collection(self.0.iter())
    }
}
