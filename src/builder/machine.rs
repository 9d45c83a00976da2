//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::machine::{Automaton, StateMachine};

/// Builder for a [`StateMachine`] that may start away from `q0`.
///
/// # Example
///
/// ```
/// use automata::builder::StateMachineBuilder;
/// use automata::mod_three::{ModThree, ModThreeState};
///
/// let mut machine = StateMachineBuilder::new(ModThree::new())
///     .start(ModThreeState::S2)
///     .build()
///     .unwrap();
///
/// // 2 * 2 + 1 = 5, and 5 mod 3 = 2
/// assert_eq!(machine.run_sequence(&[1], None), Ok(ModThreeState::S2));
/// ```
pub struct StateMachineBuilder<A: Automaton> {
    automaton: A,
    start: Option<A::State>,
}

impl<A: Automaton> StateMachineBuilder<A> {
    /// Create a new builder.
    pub fn new(automaton: A) -> Self {
        Self {
            automaton,
            start: None,
        }
    }

    /// Set the state the machine is positioned at (defaults to `q0`).
    pub fn start(mut self, state: A::State) -> Self {
        self.start = Some(state);
        self
    }

    /// Build the state machine, validating the start state.
    pub fn build(self) -> Result<StateMachine<A>, BuildError> {
        let current = match self.start {
            Some(state) => self.automaton.validate_state(&state)?,
            None => self.automaton.initial_state(),
        };

        Ok(StateMachine {
            automaton: self.automaton,
            current,
        })
    }
}
