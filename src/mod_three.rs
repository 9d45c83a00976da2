//! Remainder of a binary number divided by three.
//!
//! The automaton reads bits most-significant first. Each state encodes the
//! remainder `r` of the prefix read so far, and reading `bit` moves to
//! `(2 * r + bit) mod 3`:
//!
//! ```text
//! δ(S0,0)=S0  δ(S0,1)=S1
//! δ(S1,0)=S2  δ(S1,1)=S0
//! δ(S2,0)=S1  δ(S2,1)=S2
//! ```
//!
//! Every state is accepting; the final state is the answer.

use crate::builder::TransitionTableBuilder;
use crate::core::{Trace, TransitionTable};
use crate::machine::{Automaton, AutomatonError, StateMachine};
use crate::state_enum;

state_enum! {
    /// Remainder of the bits read so far.
    pub enum ModThreeState {
        S0,
        S1,
        S2,
    }
    accepting: [S0, S1, S2]
}

/// The mod-three automaton: `Q = {S0, S1, S2}`, `Σ = {0, 1}`, `q0 = S0`.
#[derive(Clone, Debug)]
pub struct ModThree {
    table: TransitionTable<ModThreeState>,
}

impl ModThree {
    pub fn new() -> Self {
        use ModThreeState::*;

        let table = TransitionTableBuilder::new(2)
            .row(S0, [S0, S1])
            .row(S1, [S2, S0])
            .row(S2, [S1, S2])
            .build()
            .expect("mod-three table is total");
        Self { table }
    }

    /// Translate a final state into the remainder it encodes.
    pub fn remainder_of(&self, state: &ModThreeState) -> Result<u8, AutomatonError> {
        let remainder = match self.validate_state(state)? {
            ModThreeState::S0 => 0,
            ModThreeState::S1 => 1,
            ModThreeState::S2 => 2,
        };
        Ok(remainder)
    }
}

impl Default for ModThree {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton for ModThree {
    type Symbol = u8;
    type State = ModThreeState;

    fn name(&self) -> &str {
        "mod-three"
    }

    fn letter_transition_index(&self, letter: &u8) -> Result<usize, AutomatonError> {
        match letter {
            0 | 1 => Ok(usize::from(*letter)),
            other => Err(AutomatonError::invalid_symbol(other)),
        }
    }

    fn validate_state(&self, state: &ModThreeState) -> Result<ModThreeState, AutomatonError> {
        if self.table.contains(state) {
            Ok(*state)
        } else {
            Err(AutomatonError::invalid_state(state))
        }
    }

    fn initial_state(&self) -> ModThreeState {
        ModThreeState::S0
    }

    fn table(&self) -> &TransitionTable<ModThreeState> {
        &self.table
    }
}

/// Remainder of the unsigned binary number `bits` divided by three.
///
/// Each call runs a fresh machine. An empty sequence is rejected.
///
/// # Example
///
/// ```
/// use automata::mod_three::binary_remainder;
///
/// assert_eq!(binary_remainder(&[1, 1, 0, 1]), Ok(1)); // 13
/// assert_eq!(binary_remainder(&[1, 1, 1, 0]), Ok(2)); // 14
/// assert_eq!(binary_remainder(&[1, 1, 1, 1]), Ok(0)); // 15
/// assert!(binary_remainder(&[]).is_err());
/// ```
pub fn binary_remainder(bits: &[u8]) -> Result<u8, AutomatonError> {
    if bits.is_empty() {
        return Err(AutomatonError::empty_input());
    }

    let mut machine = StateMachine::new(ModThree::new());
    let final_state = machine.run_sequence(bits, None)?;
    machine.automaton().remainder_of(&final_state)
}

/// [`binary_remainder`] together with the trace of the run.
///
/// Empty input is rejected the same way.
///
/// # Example
///
/// ```
/// use automata::mod_three::binary_remainder_traced;
///
/// let (remainder, trace) = binary_remainder_traced(&[1, 0]).unwrap();
/// assert_eq!(remainder, 2);
/// assert_eq!(trace.steps().len(), 2);
/// ```
pub fn binary_remainder_traced(bits: &[u8]) -> Result<(u8, Trace<ModThreeState>), AutomatonError> {
    if bits.is_empty() {
        return Err(AutomatonError::empty_input());
    }

    let mut machine = StateMachine::new(ModThree::new());
    let trace = machine.run_traced(bits, None)?;
    let remainder = machine.automaton().remainder_of(trace.final_state())?;
    Ok((remainder, trace))
}

/// Split a digit string into one integer per character.
///
/// Digits other than `0` and `1` are passed through and rejected later by
/// the automaton. Characters that are not decimal digits cannot be symbols
/// at all and fail here.
///
/// # Example
///
/// ```
/// use automata::mod_three::digits_from_string;
///
/// assert_eq!(digits_from_string("1101"), Ok(vec![1, 1, 0, 1]));
/// assert_eq!(digits_from_string("1291"), Ok(vec![1, 2, 9, 1]));
/// ```
pub fn digits_from_string(text: &str) -> Result<Vec<u8>, AutomatonError> {
    text.chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| AutomatonError::invalid_symbol(&c))
        })
        .collect()
}

/// [`binary_remainder`] of a digit string such as `"1101"`.
pub fn binary_remainder_str(text: &str) -> Result<u8, AutomatonError> {
    binary_remainder(&digits_from_string(text)?)
}
