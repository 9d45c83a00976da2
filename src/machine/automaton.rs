//! The capability set every concrete automaton provides.

use crate::core::{State, TransitionTable};
use crate::machine::error::AutomatonError;
use std::fmt::Debug;

/// A deterministic finite automaton definition `(Q, Σ, q0, F, δ)`.
///
/// Implementors supply every capability; the engine in
/// [`StateMachine`](crate::machine::StateMachine) only composes them.
/// `Q` is the set of states the table has rows for, and `F` is given by
/// [`State::is_accepting`].
pub trait Automaton {
    /// Alphabet symbol type.
    type Symbol: Debug;

    /// State type.
    type State: State;

    /// Name used in logs and checkpoints.
    fn name(&self) -> &str;

    /// Position of `letter` in a transition-table row.
    ///
    /// Must fail with [`AutomatonError::InvalidAlphabetSymbol`] for any
    /// symbol outside the alphabet.
    fn letter_transition_index(&self, letter: &Self::Symbol) -> Result<usize, AutomatonError>;

    /// Confirm `state` is a member of `Q`.
    ///
    /// Must fail with [`AutomatonError::InvalidState`] otherwise.
    fn validate_state(&self, state: &Self::State) -> Result<Self::State, AutomatonError>;

    /// The initial state `q0`.
    fn initial_state(&self) -> Self::State;

    /// The transition function `δ`.
    fn table(&self) -> &TransitionTable<Self::State>;
}
