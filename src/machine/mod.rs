//! Generic finite-state-machine engine.
//!
//! # Key Concepts
//!
//! - **Automaton**: the capability set a concrete automaton implements
//!   (letter indexing, state validation, initial state, transition table)
//! - **State Machine**: owns an automaton and its current state, applies
//!   single transitions and folds whole sequences
//! - **Errors**: `InvalidAlphabetSymbol` and `InvalidState`, reported before
//!   the current state is touched

mod automaton;
mod engine;
mod error;

pub use automaton::Automaton;
pub use engine::StateMachine;
pub use error::AutomatonError;
