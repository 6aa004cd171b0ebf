use crate::Symbol;

/// A finite word is anything that can be read as a finite sequence of [`Symbol`]s.
///
/// A string slice is read character by character, so `"abc"` is the word consisting of
/// the three symbols `a`, `b` and `c`. Symbols that are longer than a single character
/// can be given as a slice or vector of labels, e.g. `["if", "then"]`.
pub trait FiniteWord {
    /// Collects the symbols of the word in order.
    fn symbols(&self) -> Vec<Symbol>;
}

impl FiniteWord for str {
    fn symbols(&self) -> Vec<Symbol> {
        self.chars().map(Symbol::from).collect()
    }
}

impl FiniteWord for String {
    fn symbols(&self) -> Vec<Symbol> {
        self.as_str().symbols()
    }
}

impl FiniteWord for [Symbol] {
    fn symbols(&self) -> Vec<Symbol> {
        self.to_vec()
    }
}

impl FiniteWord for Vec<Symbol> {
    fn symbols(&self) -> Vec<Symbol> {
        self.clone()
    }
}

impl FiniteWord for [&str] {
    fn symbols(&self) -> Vec<Symbol> {
        self.iter().map(|s| Symbol::from(*s)).collect()
    }
}

impl FiniteWord for Vec<&str> {
    fn symbols(&self) -> Vec<Symbol> {
        self.as_slice().symbols()
    }
}

impl<const N: usize> FiniteWord for [&str; N] {
    fn symbols(&self) -> Vec<Symbol> {
        self.as_slice().symbols()
    }
}

impl FiniteWord for [char] {
    fn symbols(&self) -> Vec<Symbol> {
        self.iter().map(|c| Symbol::from(*c)).collect()
    }
}

impl<W: FiniteWord + ?Sized> FiniteWord for &W {
    fn symbols(&self) -> Vec<Symbol> {
        W::symbols(*self)
    }
}
