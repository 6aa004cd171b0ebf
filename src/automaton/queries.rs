use itertools::Itertools;

use crate::{
    math::{Map, Set},
    prelude::*,
};

impl Automaton {
    /// Iterates over all states in the order in which they were created.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> + '_ {
        self.states.iter().map(|(id, state)| (*id, state))
    }

    /// Iterates over all transitions in the order in which they were created, with their
    /// endpoints resolved to labels.
    pub fn transitions(&self) -> impl Iterator<Item = TransitionRef<'_>> + '_ {
        self.transitions
            .iter()
            .map(|(id, transition)| self.transition_ref(*id, transition))
    }

    fn transition_ref<'a>(&'a self, id: TransitionId, transition: &'a Transition) -> TransitionRef<'a> {
        TransitionRef {
            id,
            departure: self.label_of(transition.departure()),
            symbol: transition.symbol(),
            arrival: self.label_of(transition.arrival()),
            transition,
        }
    }

    /// The number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// The number of transitions.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Gives the state with the given label, if it exists.
    pub fn state(&self, label: &str) -> Option<&State> {
        self.labels
            .get_by_left(label)
            .and_then(|id| self.states.get(id))
    }

    /// Gives the state with the given identifier, `None` if it was deleted.
    pub fn state_by_id(&self, id: StateId) -> Option<&State> {
        self.states.get(&id)
    }

    /// Returns true if a state with the given label exists.
    pub fn contains_state(&self, label: &str) -> bool {
        self.labels.contains_left(label)
    }

    /// Gives the transition that `key` refers to, if it exists.
    pub fn transition(&self, key: &TransitionKey) -> Option<&Transition> {
        self.transition_id(key)
            .ok()
            .and_then(|id| self.transitions.get(&id))
    }

    /// Gives the transition with the given identifier, `None` if it was deleted.
    pub fn transition_by_id(&self, id: TransitionId) -> Option<&Transition> {
        self.transitions.get(&id)
    }

    /// Returns true if `key` refers to an existing transition.
    pub fn contains_transition(&self, key: &TransitionKey) -> bool {
        self.transition_id(key).is_ok()
    }

    /// The initial state, if one is set.
    pub fn initial_state(&self) -> Option<(StateId, &State)> {
        self.initial
            .and_then(|id| self.states.get(&id).map(|state| (id, state)))
    }

    /// Iterates over the final states in creation order. This is a view on the states and
    /// always agrees with their final flags.
    pub fn final_states(&self) -> impl Iterator<Item = (StateId, &State)> + '_ {
        self.states().filter(|(_, state)| state.is_final())
    }

    /// Gives the labels of all states that can be reached from the state called `label`
    /// by consuming `symbol`, in the order in which the transitions were created.
    ///
    /// ```
    /// use finite_automata::prelude::*;
    ///
    /// let automaton = AutomatonBuilder::new(Alphabet::new(['a']))
    ///     .with_states([("q0", true, false), ("q1", false, true), ("q2", false, false)])
    ///     .with_transitions([("q0", 'a', "q1"), ("q0", 'a', "q2")])
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(automaton.successors("q0", 'a').unwrap(), vec!["q1", "q2"]);
    /// assert!(automaton.successors("q1", 'a').unwrap().is_empty());
    /// ```
    pub fn successors<S: Into<Symbol>>(&self, label: &str, symbol: S) -> Result<Vec<&str>> {
        let symbol = symbol.into();
        let source = self.state_id(label)?;
        self.ensure_symbol(&symbol)?;
        Ok(self
            .transitions
            .values()
            .filter(|t| t.departure() == source && t.symbol() == &symbol)
            .map(|t| self.label_of(t.arrival()))
            .collect())
    }

    /// Builds the successor relation of the automaton: for every pair of state and symbol
    /// that has at least one outgoing transition, the arrival states in creation order.
    /// The map is a snapshot and is not updated when the automaton changes.
    pub(crate) fn successor_map(&self) -> Map<(StateId, &Symbol), Vec<StateId>> {
        let mut map: Map<(StateId, &Symbol), Vec<StateId>> = Map::default();
        for transition in self.transitions.values() {
            map.entry((transition.departure(), transition.symbol()))
                .or_default()
                .push(transition.arrival());
        }
        map
    }

    /// Returns true if no two transitions leave the same state on the same symbol.
    pub fn is_deterministic(&self) -> bool {
        let mut seen = Set::default();
        self.transitions
            .values()
            .all(|t| seen.insert((t.departure(), t.symbol())))
    }

    /// Returns true if every state has at least one outgoing transition for every symbol
    /// of the alphabet.
    pub fn is_total(&self) -> bool {
        let covered = self
            .transitions
            .values()
            .map(|t| (t.departure(), t.symbol()))
            .collect::<Set<_>>();
        self.states
            .keys()
            .cartesian_product(self.alphabet.iter())
            .all(|(q, symbol)| covered.contains(&(*q, symbol)))
    }
}
