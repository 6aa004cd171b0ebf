use tracing::debug;

use crate::{prelude::*, transition::render_label};

/// Describes a change to a transition, used by [`Automaton::update_transition`]. Fields
/// that are left at `None` keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionUpdate {
    /// Label of the new departure state.
    pub departure: Option<String>,
    /// Label of the new arrival state.
    pub arrival: Option<String>,
    /// The new symbol.
    pub symbol: Option<Symbol>,
}

impl TransitionUpdate {
    /// Moves the start of the transition to another state.
    pub fn with_departure<L: Into<String>>(mut self, departure: L) -> Self {
        self.departure = Some(departure.into());
        self
    }

    /// Moves the end of the transition to another state.
    pub fn with_arrival<L: Into<String>>(mut self, arrival: L) -> Self {
        self.arrival = Some(arrival.into());
        self
    }

    /// Changes the consumed symbol.
    pub fn with_symbol<S: Into<Symbol>>(mut self, symbol: S) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

impl Automaton {
    /// Creates a transition from the state called `departure` to the state called
    /// `arrival` which consumes `symbol`.
    ///
    /// Fails with [`AutomatonError::StateNotFound`] if one of the states does not exist,
    /// with [`AutomatonError::SymbolNotInAlphabet`] if the symbol is unknown and with
    /// [`AutomatonError::DuplicateTransition`] if the very same transition exists already.
    /// A second transition on the same departure and symbol but to a different arrival is
    /// fine, this is what makes the automaton nondeterministic.
    pub fn create_transition<S: Into<Symbol>>(
        &mut self,
        departure: &str,
        arrival: &str,
        symbol: S,
    ) -> Result<TransitionId> {
        let symbol = symbol.into();
        let source = self.state_id(departure)?;
        let target = self.state_id(arrival)?;
        self.ensure_symbol(&symbol)?;

        let triple = (source, symbol.clone(), target);
        if self.triples.contains_left(&triple) {
            return Err(AutomatonError::DuplicateTransition(TransitionKey::new(
                departure, symbol, arrival,
            )));
        }

        let id = self.transition_ids.next_transition();
        let label = render_label(departure, &symbol, arrival);
        debug!("creating transition {label} as {id:?}");
        self.transitions
            .insert(id, Transition::new(source, symbol, target, label));
        self.triples.insert(triple, id);

        self.debug_check();
        Ok(id)
    }

    /// Changes the transition that `key` refers to. The transition keeps its identifier,
    /// while its label and loop flag reflect the new endpoints and symbol.
    ///
    /// Fails if `key` does not refer to a transition, if a new endpoint does not exist, if
    /// the new symbol is not in the alphabet, or if the changed transition would coincide
    /// with a different one that exists already. On error nothing is changed.
    pub fn update_transition<K: Into<TransitionKey>>(
        &mut self,
        key: K,
        update: TransitionUpdate,
    ) -> Result<TransitionId> {
        let key = key.into();
        let id = self.transition_id(&key)?;
        let Some(transition) = self.transitions.get(&id) else {
            return Err(AutomatonError::TransitionNotFound(key));
        };

        let (mut source, mut symbol, mut target) = transition.triple();
        if let Some(departure) = &update.departure {
            source = self.state_id(departure)?;
        }
        if let Some(arrival) = &update.arrival {
            target = self.state_id(arrival)?;
        }
        if let Some(new_symbol) = update.symbol {
            self.ensure_symbol(&new_symbol)?;
            symbol = new_symbol;
        }

        let triple = (source, symbol.clone(), target);
        match self.triples.get_by_left(&triple) {
            Some(other) if *other != id => {
                return Err(AutomatonError::DuplicateTransition(self.key_of(&triple)))
            }
            _ => {}
        }

        debug!("rewiring transition {key} to {}", self.key_of(&triple));
        self.triples.remove_by_right(&id);
        self.triples.insert(triple, id);
        if let Some(transition) = self.transitions.get_mut(&id) {
            transition.rewire(source, symbol, target);
        }
        self.refresh_label(id);

        self.debug_check();
        Ok(id)
    }

    /// Deletes the transition that `key` refers to and gives it back.
    pub fn delete_transition<K: Into<TransitionKey>>(&mut self, key: K) -> Result<Transition> {
        let key = key.into();
        let id = self.transition_id(&key)?;
        debug!("deleting transition {key}");
        let removed = self.remove_transition(id);

        self.debug_check();
        removed.ok_or(AutomatonError::TransitionNotFound(key))
    }

    /// Deletes the given transitions one after the other.
    ///
    /// Stops at the first key that does not refer to a transition and returns the error.
    /// Transitions deleted before that point stay deleted.
    pub fn delete_transitions<I, K>(&mut self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = K>,
        K: Into<TransitionKey>,
    {
        for key in keys {
            self.delete_transition(key)?;
        }
        Ok(())
    }

    pub(super) fn remove_transition(&mut self, id: TransitionId) -> Option<Transition> {
        self.triples.remove_by_right(&id);
        self.transitions.remove(&id)
    }
}
