//! Build errors for transition tables and state machines.

use crate::machine::AutomatonError;
use thiserror::Error;

/// Errors that can occur when building transition tables and state machines.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Alphabet is empty. A transition table needs at least one symbol")]
    EmptyAlphabet,

    #[error("No rows defined. Add at least one state with .row(state, next)")]
    NoStates,

    #[error("State '{state}' has more than one row")]
    DuplicateRow { state: String },

    #[error("State '{state}' has {found} next states, alphabet has {expected} symbols")]
    WrongArity {
        state: String,
        expected: usize,
        found: usize,
    },

    #[error("State '{state}' transitions to '{target}', which has no row")]
    UnknownTarget { state: String, target: String },

    #[error("Start state rejected: {0}")]
    InvalidStart(#[from] AutomatonError),
}
