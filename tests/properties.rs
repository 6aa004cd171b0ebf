//! Property-based tests for the structural invariants of automata and for recognition.
//!
//! Random sequences of operations are applied to an automaton. After every operation the
//! invariants must hold, and a failed operation must not change anything.

use finite_automata::prelude::*;
use proptest::prelude::*;

const LABELS: [&str; 5] = ["q0", "q1", "q2", "q3", "q4"];
/// `z` is not part of the alphabet.
const SYMBOLS: [char; 3] = ['a', 'b', 'z'];

#[derive(Clone, Debug)]
enum Op {
    CreateState(usize, bool, bool),
    UpdateState(usize, Option<usize>, Option<bool>, Option<bool>),
    DeleteState(usize),
    CreateTransition(usize, usize, usize),
    UpdateTransition((usize, usize, usize), Option<usize>, Option<usize>, Option<usize>),
    DeleteTransition((usize, usize, usize)),
}

fn label() -> impl Strategy<Value = usize> {
    0..LABELS.len()
}

fn symbol() -> impl Strategy<Value = usize> {
    0..SYMBOLS.len()
}

fn triple() -> impl Strategy<Value = (usize, usize, usize)> {
    (label(), symbol(), label())
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => (label(), any::<bool>(), any::<bool>()).prop_map(|(l, i, f)| Op::CreateState(l, i, f)),
        1 => (label(), proptest::option::of(label()), proptest::option::of(any::<bool>()), proptest::option::of(any::<bool>()))
            .prop_map(|(l, n, i, f)| Op::UpdateState(l, n, i, f)),
        1 => label().prop_map(Op::DeleteState),
        4 => (label(), label(), symbol()).prop_map(|(d, a, s)| Op::CreateTransition(d, a, s)),
        1 => (triple(), proptest::option::of(label()), proptest::option::of(label()), proptest::option::of(symbol()))
            .prop_map(|(k, d, a, s)| Op::UpdateTransition(k, d, a, s)),
        1 => triple().prop_map(Op::DeleteTransition),
    ]
}

fn key((d, s, a): (usize, usize, usize)) -> TransitionKey {
    TransitionKey::new(LABELS[d], SYMBOLS[s], LABELS[a])
}

fn apply(automaton: &mut Automaton, op: &Op) -> Result<()> {
    match op {
        Op::CreateState(l, i, f) => automaton.create_state(LABELS[*l], *i, *f).map(drop),
        Op::UpdateState(l, n, i, f) => {
            let update = StateUpdate {
                label: n.map(|n| LABELS[n].to_string()),
                initial: *i,
                is_final: *f,
            };
            automaton.update_state(LABELS[*l], update).map(drop)
        }
        Op::DeleteState(l) => automaton.delete_state(LABELS[*l]).map(drop),
        Op::CreateTransition(d, a, s) => automaton
            .create_transition(LABELS[*d], LABELS[*a], SYMBOLS[*s])
            .map(drop),
        Op::UpdateTransition(k, d, a, s) => {
            let update = TransitionUpdate {
                departure: d.map(|d| LABELS[d].to_string()),
                arrival: a.map(|a| LABELS[a].to_string()),
                symbol: s.map(|s| Symbol::from(SYMBOLS[s])),
            };
            automaton.update_transition(key(*k), update).map(drop)
        }
        Op::DeleteTransition(k) => automaton.delete_transition(key(*k)).map(drop),
    }
}

/// Everything about the automaton that is observable from the outside.
fn snapshot(automaton: &Automaton) -> (String, TransitionTable, Vec<(StateId, State)>) {
    (
        automaton.to_string(),
        automaton.transition_table(),
        automaton.states().map(|(id, s)| (id, s.clone())).collect(),
    )
}

fn check_invariants(automaton: &Automaton) -> Result<(), TestCaseError> {
    prop_assert!(automaton.is_consistent());

    let initial = automaton
        .states()
        .filter(|(_, s)| s.is_initial())
        .map(|(id, _)| id)
        .collect::<Vec<_>>();
    prop_assert!(initial.len() <= 1);
    prop_assert_eq!(initial.first().copied(), automaton.initial_state().map(|(id, _)| id));

    let finals = automaton.final_states().map(|(id, _)| id).collect::<Vec<_>>();
    let flagged = automaton
        .states()
        .filter(|(_, s)| s.is_final())
        .map(|(id, _)| id)
        .collect::<Vec<_>>();
    prop_assert_eq!(finals, flagged);

    let mut seen = std::collections::HashSet::new();
    for transition in automaton.transitions() {
        prop_assert!(automaton.contains_state(transition.departure));
        prop_assert!(automaton.contains_state(transition.arrival));
        prop_assert!(automaton.alphabet().contains(transition.symbol));
        prop_assert_eq!(transition.label(), transition.key().to_string());
        prop_assert!(seen.insert(transition.key()));
    }
    Ok(())
}

/// Reference semantics: explores every path explicitly.
fn has_accepting_path(automaton: &Automaton, state: &str, word: &[Symbol]) -> bool {
    match word.split_first() {
        None => automaton.state(state).is_some_and(State::is_final),
        Some((symbol, rest)) => automaton
            .transitions()
            .filter(|t| t.departure == state && t.symbol == symbol)
            .any(|t| has_accepting_path(automaton, t.arrival, rest)),
    }
}

proptest! {
    #[test]
    fn operations_preserve_invariants(ops in proptest::collection::vec(op(), 0..40)) {
        let mut automaton = Automaton::new(Alphabet::new(['a', 'b']));
        for op in &ops {
            let before = snapshot(&automaton);
            let result = apply(&mut automaton, op);
            check_invariants(&automaton)?;
            if result.is_err() {
                let unchanged = snapshot(&automaton) == before;
                prop_assert!(unchanged, "failed {:?} changed the automaton", op);
            }
        }
    }

    #[test]
    fn out_of_alphabet_transitions_are_rejected(
        ops in proptest::collection::vec(op(), 0..20),
        (d, a) in (label(), label()),
    ) {
        let mut automaton = Automaton::new(Alphabet::new(['a', 'b']));
        for op in &ops {
            let _ = apply(&mut automaton, op);
        }
        let before = automaton.transition_count();
        let result = automaton.create_transition(LABELS[d], LABELS[a], 'z');
        prop_assert!(result.is_err());
        prop_assert_eq!(automaton.transition_count(), before);
    }

    #[test]
    fn deleting_a_state_leaves_no_dangling_transitions(
        ops in proptest::collection::vec(op(), 0..40),
        victim in label(),
    ) {
        let mut automaton = Automaton::new(Alphabet::new(['a', 'b']));
        for op in &ops {
            let _ = apply(&mut automaton, op);
        }
        let survivors = automaton
            .transitions()
            .filter(|t| t.departure != LABELS[victim] && t.arrival != LABELS[victim])
            .map(|t| t.key())
            .collect::<Vec<_>>();
        if automaton.delete_state(LABELS[victim]).is_ok() {
            let remaining = automaton.transitions().map(|t| t.key()).collect::<Vec<_>>();
            prop_assert_eq!(remaining, survivors);
        }
        check_invariants(&automaton)?;
    }

    #[test]
    fn renaming_keeps_every_transition(
        ops in proptest::collection::vec(op(), 0..40),
        from in label(),
    ) {
        let mut automaton = Automaton::new(Alphabet::new(['a', 'b']));
        for op in &ops {
            let _ = apply(&mut automaton, op);
        }
        let rename = |l: &str| if l == LABELS[from] { "renamed".to_string() } else { l.to_string() };
        let expected = automaton
            .transitions()
            .map(|t| TransitionKey::new(rename(t.departure), t.symbol, rename(t.arrival)))
            .collect::<Vec<_>>();
        if automaton
            .update_state(LABELS[from], StateUpdate::default().with_label("renamed"))
            .is_ok()
        {
            let actual = automaton.transitions().map(|t| t.key()).collect::<Vec<_>>();
            prop_assert_eq!(actual, expected);
        }
        check_invariants(&automaton)?;
    }

    #[test]
    fn recognition_agrees_with_path_search(
        ops in proptest::collection::vec(op(), 0..40),
        word in proptest::collection::vec(prop_oneof![Just('a'), Just('b')], 0..6),
    ) {
        let mut automaton = Automaton::new(Alphabet::new(['a', 'b']));
        for op in &ops {
            let _ = apply(&mut automaton, op);
        }
        let word = word.into_iter().map(Symbol::from).collect::<Vec<_>>();
        let expected = automaton
            .initial_state()
            .is_some_and(|(_, q)| has_accepting_path(&automaton, q.label(), &word));
        let first = automaton.recognize(&word);
        prop_assert_eq!(first, expected);
        prop_assert_eq!(automaton.recognize(&word), first);
        prop_assert_eq!(automaton.run(&word).is_accepted(), first);
    }
}
