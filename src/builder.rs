use crate::{automaton::DEFAULT_NAME, prelude::*};

/// Helper struct for the declarative construction of an [`Automaton`]. It stores the
/// states and transitions that should be created and hands them to the factory methods
/// of the automaton once [`AutomatonBuilder::build`] is called. States are created before
/// transitions, each in the order in which they were given.
///
/// # Example
///
/// We want an automaton over the alphabet `{a, b}` with two states `q0` and `q1`, where
/// `q0` is initial and `q1` is final, that moves from `q0` to `q1` on `a` and stays in
/// `q1` on `b`. This can be done as follows
/// ```
/// use finite_automata::prelude::*;
///
/// let automaton = AutomatonBuilder::new(Alphabet::new(['a', 'b']))
///     .with_states([("q0", true, false), ("q1", false, true)]) // (label, initial, final)
///     .with_transitions([("q0", 'a', "q1"), ("q1", 'b', "q1")]) // (departure, symbol, arrival)
///     .build()
///     .unwrap();
/// assert!(automaton.recognize("abb"));
/// ```
#[derive(Clone, Debug)]
pub struct AutomatonBuilder {
    name: String,
    alphabet: Alphabet,
    states: Vec<(String, bool, bool)>,
    transitions: Vec<(String, Symbol, String)>,
}

impl AutomatonBuilder {
    /// Creates an empty builder for the given alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            alphabet,
            states: vec![],
            transitions: vec![],
        }
    }

    /// Sets the name of the automaton.
    pub fn named<N: Into<String>>(mut self, name: N) -> Self {
        self.name = name.into();
        self
    }

    /// Adds states given as triples `(label, is_initial, is_final)`.
    pub fn with_states<L, I>(mut self, states: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, bool, bool)>,
    {
        self.states.extend(
            states
                .into_iter()
                .map(|(label, initial, accepting)| (label.into(), initial, accepting)),
        );
        self
    }

    /// Adds transitions given as triples `(departure, symbol, arrival)`.
    pub fn with_transitions<D, S, A, I>(mut self, transitions: I) -> Self
    where
        D: Into<String>,
        S: Into<Symbol>,
        A: Into<String>,
        I: IntoIterator<Item = (D, S, A)>,
    {
        self.transitions.extend(
            transitions
                .into_iter()
                .map(|(d, s, a)| (d.into(), s.into(), a.into())),
        );
        self
    }

    /// Creates the automaton. Returns the first error that one of the factory methods of
    /// [`Automaton`] reports.
    pub fn build(self) -> Result<Automaton> {
        let mut automaton = Automaton::named(self.name, self.alphabet);
        for (label, initial, accepting) in self.states {
            automaton.create_state(label, initial, accepting)?;
        }
        for (departure, symbol, arrival) in self.transitions {
            automaton.create_transition(&departure, &arrival, symbol)?;
        }
        Ok(automaton)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test_log::test]
    fn build_reports_first_error() {
        let result = AutomatonBuilder::new(Alphabet::new(['a']))
            .with_states([("q0", true, false), ("q0", false, true)])
            .build();
        assert_eq!(
            result.unwrap_err(),
            AutomatonError::DuplicateLabel("q0".into())
        );

        let result = Automaton::builder(Alphabet::new(['a']))
            .with_states([("q0", true, false)])
            .with_transitions([("q0", 'b', "q0")])
            .build();
        assert_eq!(
            result.unwrap_err(),
            AutomatonError::SymbolNotInAlphabet(Symbol::from('b'))
        );
    }

    #[test_log::test]
    fn named_builder() {
        let automaton = AutomatonBuilder::new(Alphabet::new(["x"]))
            .named("Lexer")
            .with_states([("s", true, true)])
            .with_transitions([("s", "x", "s")])
            .build()
            .unwrap();
        assert_eq!(automaton.name(), "Lexer");
        assert_eq!(automaton.transition_count(), 1);
    }
}
