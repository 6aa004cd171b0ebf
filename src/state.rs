use std::fmt::Display;

use crate::Show;

/// A state of an [`crate::Automaton`]. It is identified by its label, which is unique
/// within the automaton that owns it, and carries two flags that determine whether it
/// is the initial state and whether it is final (accepting). The two flags are
/// independent, a state can be both initial and final.
///
/// States cannot be created on their own, they are always produced by
/// [`crate::Automaton::create_state`] and only read access is handed out. All changes go
/// through the automaton, which keeps its invariants intact.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State {
    label: String,
    initial: bool,
    accepting: bool,
}

impl State {
    pub(crate) fn new(label: String, initial: bool, accepting: bool) -> Self {
        Self {
            label,
            initial,
            accepting,
        }
    }

    /// The label of the state.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this is the initial state of its automaton.
    pub fn is_initial(&self) -> bool {
        self.initial
    }

    /// Whether the state is final, i.e. accepting.
    pub fn is_final(&self) -> bool {
        self.accepting
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    pub(crate) fn set_initial(&mut self, initial: bool) {
        self.initial = initial;
    }

    pub(crate) fn set_final(&mut self, accepting: bool) {
        self.accepting = accepting;
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl Show for State {
    fn show(&self) -> String {
        self.label.clone()
    }
}
