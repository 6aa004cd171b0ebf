//! Library for modelling finite automata and deciding whether they accept a word.
//!
//! An [`Automaton`] consists of a fixed [`Alphabet`], a collection of labeled [`State`]s
//! and a collection of [`Transition`]s, each of which leads from a departure state to an
//! arrival state upon consuming a [`Symbol`]. At most one state is initial, any number of
//! states may be final. The automaton owns all of its states and transitions, they can
//! only be created, changed and deleted through it. This allows it to maintain its
//! invariants: labels are unique, transitions only use symbols of the alphabet and never
//! point to states that no longer exist. Deleting a state takes all transitions with it
//! that depart from or arrive in the state, renaming a state is reflected in the labels of
//! those transitions.
//!
//! Transitions are identified by the triple of departure, symbol and arrival. As several
//! transitions may leave the same state on the same symbol, automata are in general
//! nondeterministic. Recognition ([`Automaton::recognize`]) therefore keeps track of the
//! set of all states that are reachable on the input read so far, instead of committing to
//! a single path. The word is accepted if some final state is reachable once the whole
//! input has been read. [`Automaton::run`] and [`Automaton::recognize_with_trace`] expose
//! the individual steps of this simulation.
//!
//! Further important pieces are
//! - [`AutomatonBuilder`], which constructs an automaton from lists of states and transitions,
//! - [`TransitionTable`], a read-only projection into a grid of states × symbols, which
//!   can be rendered with the `table` feature,
//! - the [`std::fmt::Display`] implementation of [`Automaton`], which prints the quintuple
//!   `(Q, Σ, δ, q0, F)`.
//!
//! All structural operations report failures through [`AutomatonError`] and log what they
//! do through `tracing`.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use itertools::Itertools;

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use finite_automata::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{Alphabet, Symbol},
        automaton::{Automaton, StateUpdate, TransitionUpdate},
        builder::AutomatonBuilder,
        error::{AutomatonError, ErrorKind, Result},
        id::{StateId, TransitionId},
        run::{Rejection, Run, TraceStep, Verdict},
        state::State,
        table::{TableRow, TransitionTable},
        transition::{Transition, TransitionKey, TransitionRef},
        word::FiniteWord,
        Show,
    };
}

/// Collection types that are used throughout the crate.
pub mod math;

/// Symbols and alphabets.
pub mod alphabet;
pub use alphabet::{Alphabet, Symbol};

/// Stable identifiers for states and transitions.
pub mod id;
pub use id::{StateId, TransitionId};

/// States of an automaton.
pub mod state;
pub use state::State;

/// Transitions of an automaton and the keys through which they are addressed.
pub mod transition;
pub use transition::{Transition, TransitionKey};

/// Errors raised by structural operations.
pub mod error;
pub use error::{AutomatonError, ErrorKind};

/// Finite words, i.e. the inputs that an automaton reads.
pub mod word;

/// Defines the automaton together with its mutation API.
pub mod automaton;
pub use automaton::Automaton;

/// Recognition of words by simulating the automaton on the set of active states.
pub mod run;

/// Declarative construction of automata.
pub mod builder;
pub use builder::AutomatonBuilder;

/// Projection of an automaton into a transition table.
pub mod table;
pub use table::TransitionTable;

/// Helper trait which can be used to display states, transitions and such.
pub trait Show {
    /// Returns a human readable representation of `self`, for a state that should be its
    /// label and for a transition its canonical label `(q0,a)->q1`.
    fn show(&self) -> String;

    /// Show a collection of the thing, for a collection of states this should be
    /// `{q0, q1, q2}`.
    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("{{{}}}", iter.into_iter().map(|x| x.show()).join(", "))
    }
}

impl Show for str {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.clone()
    }
}

impl Show for bool {
    fn show(&self) -> String {
        match self {
            true => "+",
            false => "-",
        }
        .to_string()
    }
}

impl<S: Show> Show for [S] {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

impl<S: Show + ?Sized> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}
