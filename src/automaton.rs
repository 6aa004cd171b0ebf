use std::collections::BTreeMap;

use tracing::error;

use crate::{
    id::IdCounter,
    math::Bijection,
    prelude::*,
    transition::render_label,
};

mod states;
pub use states::StateUpdate;

mod transitions;
pub use transitions::TransitionUpdate;

mod queries;

mod display;

/// Name that is used for an automaton if none is given.
pub const DEFAULT_NAME: &str = "M";

/// The triple of identifiers that determines a transition uniquely.
pub(crate) type Triple = (StateId, Symbol, StateId);

/// A finite automaton over a fixed [`Alphabet`]. It owns its [`State`]s and
/// [`Transition`]s and is the only way to create, change or delete them, which allows it
/// to guarantee the following after every operation:
/// - state labels are unique,
/// - every transition consumes a symbol of the alphabet and connects two states that exist,
/// - no two transitions have the same departure, symbol and arrival,
/// - at most one state is initial,
/// - the final states are exactly the states whose final flag is set.
///
/// States and transitions live in arenas indexed by [`StateId`] and [`TransitionId`].
/// Identifiers are handed out in increasing order and never reused, so iterating the
/// arenas yields the entities in creation order. Alongside the arenas, the automaton
/// keeps bijective indices from labels to state identifiers and from identifier triples
/// to transition identifiers.
///
/// Multiple transitions may leave the same state on the same symbol, so the automaton is
/// in general nondeterministic. [`Automaton::recognize`] decides membership of a word by
/// tracking the set of all states that are reachable on the input read so far.
///
/// # Example
/// ```
/// use finite_automata::prelude::*;
///
/// let mut automaton = Automaton::new(Alphabet::new(['a', 'b']));
/// automaton.create_state("q0", true, false).unwrap();
/// automaton.create_state("q1", false, true).unwrap();
/// automaton.create_transition("q0", "q1", 'a').unwrap();
/// automaton.create_transition("q1", "q1", 'b').unwrap();
///
/// assert!(automaton.recognize("abbb"));
/// assert!(!automaton.recognize("ba"));
/// ```
#[derive(Clone, Debug)]
pub struct Automaton {
    name: String,
    alphabet: Alphabet,
    states: BTreeMap<StateId, State>,
    labels: Bijection<String, StateId>,
    transitions: BTreeMap<TransitionId, Transition>,
    triples: Bijection<Triple, TransitionId>,
    initial: Option<StateId>,
    state_ids: IdCounter,
    transition_ids: IdCounter,
}

impl Automaton {
    /// Creates an automaton without states and transitions over the given alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        Self::named(DEFAULT_NAME, alphabet)
    }

    /// Creates an empty automaton with the given name.
    pub fn named<N: Into<String>>(name: N, alphabet: Alphabet) -> Self {
        Self {
            name: name.into(),
            alphabet,
            states: BTreeMap::new(),
            labels: Bijection::new(),
            transitions: BTreeMap::new(),
            triples: Bijection::new(),
            initial: None,
            state_ids: IdCounter::default(),
            transition_ids: IdCounter::default(),
        }
    }

    /// Instantiates an [`AutomatonBuilder`] for the given alphabet.
    pub fn builder(alphabet: Alphabet) -> AutomatonBuilder {
        AutomatonBuilder::new(alphabet)
    }

    /// The name of the automaton.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The alphabet, which is fixed at construction.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Looks up the identifier of the state with the given label.
    pub fn state_id(&self, label: &str) -> Result<StateId> {
        self.labels
            .get_by_left(label)
            .copied()
            .ok_or_else(|| AutomatonError::StateNotFound(label.to_string()))
    }

    /// Looks up the identifier of the transition that `key` refers to.
    pub fn transition_id(&self, key: &TransitionKey) -> Result<TransitionId> {
        let missing = || AutomatonError::TransitionNotFound(key.clone());
        let departure = *self
            .labels
            .get_by_left(key.departure.as_str())
            .ok_or_else(missing)?;
        let arrival = *self
            .labels
            .get_by_left(key.arrival.as_str())
            .ok_or_else(missing)?;
        self.triples
            .get_by_left(&(departure, key.symbol.clone(), arrival))
            .copied()
            .ok_or_else(missing)
    }

    /// Label of the state with the given identifier, empty if there is no such state.
    pub(crate) fn label_of(&self, id: StateId) -> &str {
        self.states.get(&id).map(State::label).unwrap_or_default()
    }

    pub(crate) fn key_of(&self, (departure, symbol, arrival): &Triple) -> TransitionKey {
        TransitionKey::new(self.label_of(*departure), symbol, self.label_of(*arrival))
    }

    fn ensure_symbol(&self, symbol: &Symbol) -> Result<()> {
        if self.alphabet.contains(symbol) {
            Ok(())
        } else {
            Err(AutomatonError::SymbolNotInAlphabet(symbol.clone()))
        }
    }

    /// Recomputes the cached label of the transition from the current labels of its endpoints.
    fn refresh_label(&mut self, id: TransitionId) {
        let Some(transition) = self.transitions.get(&id) else {
            return;
        };
        let label = render_label(
            self.label_of(transition.departure()),
            transition.symbol(),
            self.label_of(transition.arrival()),
        );
        if let Some(transition) = self.transitions.get_mut(&id) {
            transition.set_label(label);
        }
    }

    /// Identifiers of all transitions that depart from or arrive in `state`.
    fn transitions_touching(&self, state: StateId) -> Vec<TransitionId> {
        self.transitions
            .iter()
            .filter(|(_, t)| t.departure() == state || t.arrival() == state)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Checks every structural invariant of the automaton and reports each violation
    /// through `tracing` at the error level. Returns true if no violation was found.
    pub fn is_consistent(&self) -> bool {
        let mut consistent = true;
        let mut violation = |msg: String| {
            error!("{}: {msg}", self.name);
            consistent = false;
        };

        if self.labels.len() != self.states.len() {
            violation(format!(
                "label index has {} entries for {} states",
                self.labels.len(),
                self.states.len()
            ));
        }
        for (id, state) in &self.states {
            if self.labels.get_by_left(state.label()) != Some(id) {
                violation(format!("state {id:?} is not indexed under `{}`", state.label()));
            }
            if state.is_initial() != (self.initial == Some(*id)) {
                violation(format!("initial flag of `{}` is out of sync", state.label()));
            }
        }
        if let Some(initial) = self.initial {
            if !self.states.contains_key(&initial) {
                violation(format!("initial state {initial:?} does not exist"));
            }
        }

        if self.triples.len() != self.transitions.len() {
            violation(format!(
                "transition index has {} entries for {} transitions",
                self.triples.len(),
                self.transitions.len()
            ));
        }
        for (id, transition) in &self.transitions {
            if !self.alphabet.contains(transition.symbol()) {
                violation(format!(
                    "{} consumes a symbol outside the alphabet",
                    transition.label()
                ));
            }
            for endpoint in [transition.departure(), transition.arrival()] {
                if !self.states.contains_key(&endpoint) {
                    violation(format!(
                        "{} references missing state {endpoint:?}",
                        transition.label()
                    ));
                }
            }
            if self.triples.get_by_left(&transition.triple()) != Some(id) {
                violation(format!("{} is not indexed", transition.label()));
            }
            let expected = render_label(
                self.label_of(transition.departure()),
                transition.symbol(),
                self.label_of(transition.arrival()),
            );
            if transition.label() != expected {
                violation(format!(
                    "stale label {}, expected {expected}",
                    transition.label()
                ));
            }
        }
        consistent
    }

    fn debug_check(&self) {
        debug_assert!(self.is_consistent(), "automaton invariants are violated");
    }
}
