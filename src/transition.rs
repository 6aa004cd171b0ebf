use std::fmt::Display;

use crate::{Show, StateId, Symbol, TransitionId};

/// Renders the canonical label `(departure,symbol)->arrival` of a transition.
pub(crate) fn render_label(departure: &str, symbol: &Symbol, arrival: &str) -> String {
    format!("({departure},{symbol})->{arrival}")
}

/// A transition of an [`crate::Automaton`]: an edge from a departure state to an arrival
/// state which may be taken upon consuming a symbol.
///
/// The states are referenced through their [`StateId`], the transition never holds a
/// copy of them. It caches its canonical label, which the owning automaton recomputes
/// whenever one of the endpoints is renamed or the transition itself is changed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    departure: StateId,
    symbol: Symbol,
    arrival: StateId,
    label: String,
}

impl Transition {
    pub(crate) fn new(departure: StateId, symbol: Symbol, arrival: StateId, label: String) -> Self {
        Self {
            departure,
            symbol,
            arrival,
            label,
        }
    }

    /// The state in which the transition starts.
    pub fn departure(&self) -> StateId {
        self.departure
    }

    /// The state in which the transition ends.
    pub fn arrival(&self) -> StateId {
        self.arrival
    }

    /// The symbol that is consumed when taking the transition.
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// The canonical label, for example `(q0,a)->q1`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns true if departure and arrival coincide.
    pub fn is_loop(&self) -> bool {
        self.departure == self.arrival
    }

    /// The triple of identifiers under which the automaton indexes this transition.
    pub(crate) fn triple(&self) -> (StateId, Symbol, StateId) {
        (self.departure, self.symbol.clone(), self.arrival)
    }

    pub(crate) fn rewire(&mut self, departure: StateId, symbol: Symbol, arrival: StateId) {
        self.departure = departure;
        self.symbol = symbol;
        self.arrival = arrival;
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }
}

impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl Show for Transition {
    fn show(&self) -> String {
        self.label.clone()
    }
}

/// Addresses a transition by the labels of its endpoints and its symbol. This is how
/// callers refer to transitions, as the triple is unique within an automaton.
///
/// # Example
/// ```
/// use finite_automata::prelude::*;
///
/// let key = TransitionKey::new("q0", 'a', "q1");
/// assert_eq!(key.to_string(), "(q0,a)->q1");
/// assert_eq!(key, TransitionKey::from(("q0", "a", "q1")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionKey {
    /// Label of the departure state.
    pub departure: String,
    /// The consumed symbol.
    pub symbol: Symbol,
    /// Label of the arrival state.
    pub arrival: String,
}

impl TransitionKey {
    /// Creates a new key from the departure label, the symbol and the arrival label.
    pub fn new<D, S, A>(departure: D, symbol: S, arrival: A) -> Self
    where
        D: Into<String>,
        S: Into<Symbol>,
        A: Into<String>,
    {
        Self {
            departure: departure.into(),
            symbol: symbol.into(),
            arrival: arrival.into(),
        }
    }
}

impl<D, S, A> From<(D, S, A)> for TransitionKey
where
    D: Into<String>,
    S: Into<Symbol>,
    A: Into<String>,
{
    fn from((departure, symbol, arrival): (D, S, A)) -> Self {
        Self::new(departure, symbol, arrival)
    }
}

impl Display for TransitionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            render_label(&self.departure, &self.symbol, &self.arrival)
        )
    }
}

impl Show for TransitionKey {
    fn show(&self) -> String {
        self.to_string()
    }
}

/// Read-only view of a transition as it is handed out by [`crate::Automaton::transitions`],
/// with the endpoints already resolved to their labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionRef<'a> {
    /// Identifier of the transition.
    pub id: TransitionId,
    /// Label of the departure state.
    pub departure: &'a str,
    /// The consumed symbol.
    pub symbol: &'a Symbol,
    /// Label of the arrival state.
    pub arrival: &'a str,
    /// The underlying transition.
    pub transition: &'a Transition,
}

impl<'a> TransitionRef<'a> {
    /// Turns the view into an owned [`TransitionKey`].
    pub fn key(&self) -> TransitionKey {
        TransitionKey::new(self.departure, self.symbol, self.arrival)
    }

    /// The canonical label of the transition.
    pub fn label(&self) -> &'a str {
        self.transition.label()
    }

    /// Returns true if the transition is a self-loop.
    pub fn is_loop(&self) -> bool {
        self.transition.is_loop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_renders_canonical_label() {
        let key = TransitionKey::new("q0", "a", "q1");
        assert_eq!(key.to_string(), "(q0,a)->q1");
        assert_eq!(render_label("p", &Symbol::from("if"), "p"), "(p,if)->p");
    }
}
