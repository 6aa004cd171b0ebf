use tracing::debug;

use crate::prelude::*;

/// Describes a change to a state, used by [`Automaton::update_state`]. Fields that are
/// left at `None` are not touched.
///
/// ```
/// use finite_automata::prelude::*;
///
/// let update = StateUpdate::default().with_label("p").with_final(true);
/// assert_eq!(update.label.as_deref(), Some("p"));
/// assert_eq!(update.initial, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateUpdate {
    /// New label for the state.
    pub label: Option<String>,
    /// Whether the state should be initial.
    pub initial: Option<bool>,
    /// Whether the state should be final.
    pub is_final: Option<bool>,
}

impl StateUpdate {
    /// Renames the state.
    pub fn with_label<L: Into<String>>(mut self, label: L) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets or clears the initial flag.
    pub fn with_initial(mut self, initial: bool) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Sets or clears the final flag.
    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = Some(is_final);
        self
    }
}

impl Automaton {
    /// Creates a new state and returns its identifier. Fails with
    /// [`AutomatonError::DuplicateLabel`] if the label is taken.
    ///
    /// If `is_initial` is set, the new state becomes the initial state, and whichever state
    /// was initial before silently stops being so.
    pub fn create_state<L: Into<String>>(
        &mut self,
        label: L,
        is_initial: bool,
        is_final: bool,
    ) -> Result<StateId> {
        let label = label.into();
        if self.labels.contains_left(&label) {
            return Err(AutomatonError::DuplicateLabel(label));
        }

        let id = self.state_ids.next_state();
        debug!("creating state `{label}` as {id:?} (initial: {is_initial}, final: {is_final})");
        self.states
            .insert(id, State::new(label.clone(), false, is_final));
        self.labels.insert(label, id);
        if is_initial {
            self.make_initial(id);
        }

        self.debug_check();
        Ok(id)
    }

    /// Applies `update` to the state called `label` and returns its identifier.
    ///
    /// Renaming the state to a label that belongs to a different state fails with
    /// [`AutomatonError::DuplicateLabel`]. A rename is reflected in the labels of all
    /// transitions that depart from or arrive in the state. Everything is validated before
    /// anything is changed, so on error the automaton is left untouched.
    pub fn update_state(&mut self, label: &str, update: StateUpdate) -> Result<StateId> {
        let id = self.state_id(label)?;
        if let Some(new_label) = &update.label {
            match self.labels.get_by_left(new_label.as_str()) {
                Some(other) if *other != id => {
                    return Err(AutomatonError::DuplicateLabel(new_label.clone()))
                }
                _ => {}
            }
        }

        debug!("updating state `{label}` with {update:?}");
        if let Some(new_label) = update.label {
            if new_label != label {
                self.rename(id, new_label);
            }
        }
        match update.initial {
            Some(true) => self.make_initial(id),
            Some(false) => self.clear_initial(id),
            None => {}
        }
        if let Some(is_final) = update.is_final {
            if let Some(state) = self.states.get_mut(&id) {
                state.set_final(is_final);
            }
        }

        self.debug_check();
        Ok(id)
    }

    /// Deletes the state called `label` together with every transition that departs from
    /// or arrives in it, and gives back the removed state.
    pub fn delete_state(&mut self, label: &str) -> Result<State> {
        let id = self.state_id(label)?;

        let dependent = self.transitions_touching(id);
        debug!(
            "deleting state `{label}` and {} dependent transitions",
            dependent.len()
        );
        for transition in dependent {
            self.remove_transition(transition);
        }
        if self.initial == Some(id) {
            self.initial = None;
        }
        self.labels.remove_by_right(&id);
        let removed = self.states.remove(&id);

        self.debug_check();
        removed.ok_or_else(|| AutomatonError::StateNotFound(label.to_string()))
    }

    /// Deletes the given states one after the other.
    ///
    /// Stops at the first label that cannot be deleted and returns its error. States that
    /// were deleted before that point stay deleted.
    pub fn delete_states<I, L>(&mut self, labels: I) -> Result<()>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        for label in labels {
            self.delete_state(label.as_ref())?;
        }
        Ok(())
    }

    fn make_initial(&mut self, id: StateId) {
        if let Some(previous) = self.initial.replace(id) {
            if previous != id {
                debug!("{previous:?} is superseded as initial state by {id:?}");
                if let Some(state) = self.states.get_mut(&previous) {
                    state.set_initial(false);
                }
            }
        }
        if let Some(state) = self.states.get_mut(&id) {
            state.set_initial(true);
        }
    }

    fn clear_initial(&mut self, id: StateId) {
        if self.initial == Some(id) {
            self.initial = None;
        }
        if let Some(state) = self.states.get_mut(&id) {
            state.set_initial(false);
        }
    }

    fn rename(&mut self, id: StateId, label: String) {
        self.labels.remove_by_right(&id);
        self.labels.insert(label.clone(), id);
        if let Some(state) = self.states.get_mut(&id) {
            state.set_label(label);
        }
        for transition in self.transitions_touching(id) {
            self.refresh_label(transition);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::automaton::tests::abc_automaton;
    use crate::prelude::*;

    fn labels(automaton: &Automaton) -> Vec<String> {
        automaton
            .transitions()
            .map(|t| t.label().to_string())
            .collect()
    }

    #[test_log::test]
    fn create_rejects_duplicates() {
        let mut automaton = abc_automaton();
        assert_eq!(
            automaton.create_state("q1", false, false),
            Err(AutomatonError::DuplicateLabel("q1".into()))
        );
        assert_eq!(automaton.size(), 3);
        assert!(automaton.state("q1").unwrap().is_final());
    }

    #[test_log::test]
    fn last_initial_state_wins() {
        let mut automaton = abc_automaton();
        let q3 = automaton.create_state("q3", true, false).unwrap();
        assert_eq!(automaton.initial_state().map(|(id, _)| id), Some(q3));
        assert!(!automaton.state("q0").unwrap().is_initial());
        assert_eq!(
            automaton.states().filter(|(_, s)| s.is_initial()).count(),
            1
        );

        automaton
            .update_state("q1", StateUpdate::default().with_initial(true))
            .unwrap();
        assert_eq!(automaton.initial_state().unwrap().1.label(), "q1");
        assert!(!automaton.state("q3").unwrap().is_initial());
    }

    #[test_log::test]
    fn clearing_initial_flag() {
        let mut automaton = abc_automaton();
        automaton
            .update_state("q1", StateUpdate::default().with_initial(false))
            .unwrap();
        assert_eq!(automaton.initial_state().unwrap().1.label(), "q0");

        automaton
            .update_state("q0", StateUpdate::default().with_initial(false))
            .unwrap();
        assert!(automaton.initial_state().is_none());
        assert!(automaton.states().all(|(_, s)| !s.is_initial()));
    }

    #[test_log::test]
    fn final_flag_toggles_membership() {
        let mut automaton = abc_automaton();
        automaton
            .update_state("q1", StateUpdate::default().with_final(false))
            .unwrap();
        automaton
            .update_state("q0", StateUpdate::default().with_final(true))
            .unwrap();
        let finals = automaton
            .final_states()
            .map(|(_, s)| s.label())
            .collect::<Vec<_>>();
        assert_eq!(finals, vec!["q0", "q2"]);
    }

    #[test_log::test]
    fn rename_cascades_to_transitions() {
        let mut automaton = abc_automaton();
        let id = automaton.state_id("q1").unwrap();
        let before = automaton.transition_count();

        let renamed = automaton
            .update_state("q1", StateUpdate::default().with_label("p"))
            .unwrap();
        assert_eq!(renamed, id);
        assert_eq!(automaton.state_id("p"), Ok(id));
        assert!(automaton.state("q1").is_none());
        assert_eq!(automaton.transition_count(), before);
        assert_eq!(
            labels(&automaton),
            vec![
                "(q0,a)->p",
                "(p,b)->p",
                "(p,c)->q2",
                "(q2,c)->q2",
                "(q2,a)->p"
            ]
        );
        assert!(automaton.contains_transition(&TransitionKey::new("p", 'b', "p")));
        assert!(automaton.recognize("abca"));
    }

    #[test_log::test]
    fn rename_collision_leaves_automaton_untouched() {
        let mut automaton = abc_automaton();
        let err = automaton
            .update_state(
                "q1",
                StateUpdate::default()
                    .with_label("q2")
                    .with_initial(true)
                    .with_final(false),
            )
            .unwrap_err();
        assert_eq!(err, AutomatonError::DuplicateLabel("q2".into()));
        let q1 = automaton.state("q1").unwrap();
        assert!(q1.is_final() && !q1.is_initial());
        assert_eq!(automaton.initial_state().unwrap().1.label(), "q0");

        // renaming a state to its own label is fine
        automaton
            .update_state("q2", StateUpdate::default().with_label("q2"))
            .unwrap();
        assert_eq!(
            automaton.update_state("nope", StateUpdate::default()),
            Err(AutomatonError::StateNotFound("nope".into()))
        );
    }

    #[test_log::test]
    fn delete_cascades() {
        let mut automaton = abc_automaton();
        let removed = automaton.delete_state("q0").unwrap();
        assert!(removed.is_initial());
        assert!(automaton.initial_state().is_none());
        assert_eq!(automaton.transition_count(), 4);

        let removed = automaton.delete_state("q1").unwrap();
        assert!(removed.is_final());
        assert_eq!(labels(&automaton), vec!["(q2,c)->q2"]);
        assert_eq!(
            automaton.final_states().map(|(_, s)| s.label()).collect::<Vec<_>>(),
            vec!["q2"]
        );
        assert!(automaton.delete_state("q1").unwrap_err().is_not_found());
    }

    #[test_log::test]
    fn identifiers_are_not_reused() {
        let mut automaton = abc_automaton();
        let old = automaton.state_id("q2").unwrap();
        automaton.delete_state("q2").unwrap();
        let new = automaton.create_state("q2", false, false).unwrap();
        assert!(new > old);
        assert!(automaton.state_by_id(old).is_none());
    }

    #[test_log::test]
    fn batch_delete_has_partial_effect() {
        let mut automaton = abc_automaton();
        let err = automaton.delete_states(["q2", "q7", "q1"]).unwrap_err();
        assert_eq!(err, AutomatonError::StateNotFound("q7".into()));
        assert!(automaton.state("q2").is_none());
        assert!(automaton.state("q1").is_some());
        assert_eq!(labels(&automaton), vec!["(q0,a)->q1", "(q1,b)->q1"]);

        automaton.delete_states(vec!["q0", "q1"]).unwrap();
        assert_eq!(automaton.size(), 0);
        assert_eq!(automaton.transition_count(), 0);
    }
}
