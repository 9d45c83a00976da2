//! Errors raised while driving an automaton.

use std::fmt::Debug;
use thiserror::Error;

/// Errors that can occur during transitions.
///
/// Both variants abort the current call. The machine's current state is
/// never modified by a call that returns one of these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("Invalid alphabet symbol {symbol}")]
    InvalidAlphabetSymbol { symbol: String },

    #[error("Invalid state {state}")]
    InvalidState { state: String },
}

impl AutomatonError {
    /// Symbol outside the automaton's alphabet.
    pub fn invalid_symbol(symbol: &impl Debug) -> Self {
        Self::InvalidAlphabetSymbol {
            symbol: format!("{symbol:?}"),
        }
    }

    /// A sequence with no symbols where at least one is required.
    pub fn empty_input() -> Self {
        Self::InvalidAlphabetSymbol {
            symbol: "<empty sequence>".to_string(),
        }
    }

    /// State outside the automaton's state set.
    pub fn invalid_state(state: &impl Debug) -> Self {
        Self::InvalidState {
            state: format!("{state:?}"),
        }
    }
}
