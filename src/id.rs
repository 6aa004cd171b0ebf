use std::fmt::Debug;

use crate::Show;

macro_rules! stable_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            /// Returns the raw index that backs this identifier.
            pub fn index(self) -> usize {
                self.0
            }

            #[allow(dead_code)]
            pub(crate) fn from_index(index: usize) -> Self {
                Self(index)
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }

        impl Show for $name {
            fn show(&self) -> String {
                format!("{:?}", self)
            }
        }

        impl From<$name> for usize {
            fn from(value: $name) -> usize {
                value.0
            }
        }
    };
}

stable_id!(
    /// Identifies a [`crate::State`] inside the automaton that created it. Identifiers are
    /// handed out in increasing order and are never reused, even after the state is deleted.
    StateId,
    "q"
);

stable_id!(
    /// Identifies a [`crate::Transition`] inside the automaton that created it. Follows the
    /// same allocation rules as [`StateId`].
    TransitionId,
    "t"
);

/// Hands out fresh identifiers. The counter only ever moves forward, so an identifier
/// that refers to a deleted entity can never start pointing at a different one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct IdCounter(usize);

impl IdCounter {
    pub(crate) fn next_state(&mut self) -> StateId {
        StateId(self.bump())
    }

    pub(crate) fn next_transition(&mut self) -> TransitionId {
        TransitionId(self.bump())
    }

    fn bump(&mut self) -> usize {
        let id = self.0;
        self.0 += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_never_reused() {
        let mut counter = IdCounter::default();
        let first = counter.next_state();
        let second = counter.next_state();
        assert!(first < second);
        assert_eq!(second.index(), 1);
        assert_eq!(format!("{:?}", first), "q#0");
        assert_eq!(IdCounter::default().next_transition().show(), "t#0");
    }
}
