use bit_set::BitSet;
use itertools::Itertools;
use tracing::trace;

use crate::{prelude::*, Show};

/// The reason for which a word was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The automaton has no initial state, so no word can be accepted.
    NoInitialState,
    /// None of the active states has a transition on the symbol at `position`.
    Stuck {
        /// Index of the symbol that could not be consumed.
        position: usize,
        /// The symbol that could not be consumed.
        symbol: Symbol,
    },
    /// The whole word was read, but no final state is active.
    NoFinalStateReached,
}

/// Outcome of running a word.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Some final state is reachable on the word.
    Accepted,
    /// The word is rejected for the given reason.
    Rejected(Rejection),
}

impl Verdict {
    /// Returns true if the word was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// The result of [`Automaton::run`]: the verdict together with the sets of states that
/// were active before each symbol was read, plus the set that was active at the end if
/// the whole word could be consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    verdict: Verdict,
    active_sets: Vec<Vec<StateId>>,
}

impl Run {
    /// The verdict on the word.
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Returns true if the word was accepted.
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }

    /// The active state sets in the order in which they were visited. Each set is sorted by
    /// creation order of the states.
    pub fn active_sets(&self) -> &[Vec<StateId>] {
        &self.active_sets
    }

    /// The number of simulation steps that were taken.
    pub fn len(&self) -> usize {
        self.active_sets.len()
    }

    /// Returns true if the simulation did not take a single step, which only happens
    /// without an initial state.
    pub fn is_empty(&self) -> bool {
        self.active_sets.is_empty()
    }
}

/// A single step of the simulation, as it is handed to the callback of
/// [`Automaton::recognize_with_trace`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceStep<'a> {
    /// Number of symbols consumed so far.
    pub position: usize,
    /// Labels of the active states, in creation order.
    pub active: Vec<&'a str>,
    /// The part of the input that is yet to be read.
    pub remaining: &'a [Symbol],
}

impl Show for TraceStep<'_> {
    fn show(&self) -> String {
        format!(
            "{} \"{}\"",
            str::show_collection(self.active.iter().copied()),
            self.remaining.iter().join("")
        )
    }
}

impl Automaton {
    /// Decides whether the automaton accepts `word`.
    ///
    /// The simulation keeps track of the set of all states that can be reached on the
    /// prefix read so far, so every nondeterministic choice is explored and the result is
    /// the same on every call. An automaton without initial state rejects everything, and
    /// a symbol outside the alphabet leads to rejection at the point where it is read.
    ///
    /// ```
    /// use finite_automata::prelude::*;
    ///
    /// let automaton = AutomatonBuilder::new(Alphabet::new(["if", "then"]))
    ///     .with_states([("start", true, false), ("cond", false, false), ("done", false, true)])
    ///     .with_transitions([("start", "if", "cond"), ("cond", "then", "done")])
    ///     .build()
    ///     .unwrap();
    /// assert!(automaton.recognize(["if", "then"]));
    /// assert!(!automaton.recognize(["then"]));
    /// ```
    pub fn recognize<W: FiniteWord>(&self, word: W) -> bool {
        let symbols = word.symbols();
        self.simulate(&symbols, |_, _| {}).is_accepted()
    }

    /// Like [`Automaton::recognize`], but calls `callback` once for every step of the
    /// simulation with the active states and the unread part of the input. The first call
    /// shows the initial state and the full input, the last call (if the whole input could
    /// be consumed) shows the states that are active at the end and an empty remainder.
    pub fn recognize_with_trace<W, F>(&self, word: W, mut callback: F) -> bool
    where
        W: FiniteWord,
        F: FnMut(TraceStep<'_>),
    {
        let symbols = word.symbols();
        self.simulate(&symbols, |active, position| {
            callback(TraceStep {
                position,
                active: self.active_labels(active),
                remaining: &symbols[position..],
            })
        })
        .is_accepted()
    }

    /// Runs `word` and records every active state set along the way.
    pub fn run<W: FiniteWord>(&self, word: W) -> Run {
        let symbols = word.symbols();
        let mut active_sets: Vec<Vec<StateId>> = Vec::with_capacity(symbols.len() + 1);
        let verdict = self.simulate(&symbols, |active, _| {
            active_sets.push(active.iter().map(StateId::from_index).collect())
        });
        Run {
            verdict,
            active_sets,
        }
    }

    fn active_labels(&self, active: &BitSet) -> Vec<&str> {
        active
            .iter()
            .map(|q| self.label_of(StateId::from_index(q)))
            .collect()
    }

    /// Runs the active state set simulation on `word`. Before each symbol is read, and once
    /// more after the last one, `visit` is called with the active set and the number of
    /// symbols consumed so far.
    fn simulate<F>(&self, word: &[Symbol], mut visit: F) -> Verdict
    where
        F: FnMut(&BitSet, usize),
    {
        let Some((initial, _)) = self.initial_state() else {
            trace!("{} has no initial state, rejecting", self.name());
            return Verdict::Rejected(Rejection::NoInitialState);
        };
        let successors = self.successor_map();

        let mut active = BitSet::new();
        active.insert(initial.index());

        for (position, symbol) in word.iter().enumerate() {
            trace!(
                "step {position}: active {} remaining \"{}\"",
                str::show_collection(self.active_labels(&active)),
                word[position..].iter().join("")
            );
            visit(&active, position);

            let mut next = BitSet::new();
            for q in active.iter() {
                if let Some(targets) = successors.get(&(StateId::from_index(q), symbol)) {
                    next.extend(targets.iter().map(|p| p.index()));
                }
            }
            if next.is_empty() {
                trace!("no transition on {symbol:?} at position {position}, rejecting");
                return Verdict::Rejected(Rejection::Stuck {
                    position,
                    symbol: symbol.clone(),
                });
            }
            active = next;
        }

        trace!(
            "step {}: active {} remaining \"\"",
            word.len(),
            str::show_collection(self.active_labels(&active))
        );
        visit(&active, word.len());

        let accepting = active.iter().any(|q| {
            self.state_by_id(StateId::from_index(q))
                .is_some_and(State::is_final)
        });
        if accepting {
            Verdict::Accepted
        } else {
            Verdict::Rejected(Rejection::NoFinalStateReached)
        }
    }
}
