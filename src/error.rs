use thiserror::Error;

use crate::{Symbol, TransitionKey};

/// Convenience alias for results of structural operations on an automaton.
pub type Result<T, E = AutomatonError> = std::result::Result<T, E>;

/// Errors raised by the structural operations of an [`crate::Automaton`]. A failed
/// operation never leaves a partial effect behind, the automaton is exactly as it was
/// before the call. Only the batch operations (`delete_states`, `delete_transitions`)
/// keep whatever they applied before hitting the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// A state with this label exists already.
    #[error("a state called `{0}` already exists")]
    DuplicateLabel(String),
    /// A transition with this departure, symbol and arrival exists already.
    #[error("the transition {0} already exists")]
    DuplicateTransition(TransitionKey),
    /// No state carries this label.
    #[error("state `{0}` does not exist")]
    StateNotFound(String),
    /// No transition matches this key.
    #[error("transition {0} does not exist")]
    TransitionNotFound(TransitionKey),
    /// The symbol is not part of the alphabet of the automaton.
    #[error("symbol `{0}` does not exist in the alphabet")]
    SymbolNotInAlphabet(Symbol),
}

/// Coarse classification of an [`AutomatonError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`AutomatonError::DuplicateLabel`].
    DuplicateLabel,
    /// See [`AutomatonError::DuplicateTransition`].
    DuplicateTransition,
    /// A referenced state or transition is missing.
    NotFound,
    /// See [`AutomatonError::SymbolNotInAlphabet`].
    SymbolNotInAlphabet,
}

impl AutomatonError {
    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AutomatonError::DuplicateLabel(_) => ErrorKind::DuplicateLabel,
            AutomatonError::DuplicateTransition(_) => ErrorKind::DuplicateTransition,
            AutomatonError::StateNotFound(_) | AutomatonError::TransitionNotFound(_) => {
                ErrorKind::NotFound
            }
            AutomatonError::SymbolNotInAlphabet(_) => ErrorKind::SymbolNotInAlphabet,
        }
    }

    /// Returns true if the error is about a missing state or transition.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_and_kinds() {
        let err = AutomatonError::TransitionNotFound(TransitionKey::new("q0", "a", "q1"));
        assert_eq!(err.to_string(), "transition (q0,a)->q1 does not exist");
        assert!(err.is_not_found());

        let err = AutomatonError::SymbolNotInAlphabet(Symbol::from('z'));
        assert_eq!(err.to_string(), "symbol `z` does not exist in the alphabet");
        assert_eq!(err.kind(), ErrorKind::SymbolNotInAlphabet);
        assert_eq!(
            AutomatonError::DuplicateLabel("q0".into()).kind(),
            ErrorKind::DuplicateLabel
        );
    }
}
