//! Generic engine that drives any [`Automaton`].

use crate::core::{State, Step, Trace};
use crate::machine::automaton::Automaton;
use crate::machine::error::AutomatonError;

/// A running instance of an automaton.
///
/// The machine owns the automaton definition and the only mutable cell,
/// the current state. Single steps never mutate; sequence runs commit the
/// final state only after every symbol was accepted.
pub struct StateMachine<A: Automaton> {
    pub(crate) automaton: A,
    pub(crate) current: A::State,
}

impl<A: Automaton> StateMachine<A> {
    /// Create a machine positioned at the automaton's initial state.
    pub fn new(automaton: A) -> Self {
        let current = automaton.initial_state();
        Self { automaton, current }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &A::State {
        &self.current
    }

    /// Check if the current state is accepting (pure)
    pub fn is_accepting(&self) -> bool {
        self.current.is_accepting()
    }

    /// Get the automaton definition (pure)
    pub fn automaton(&self) -> &A {
        &self.automaton
    }

    /// Move back to the initial state.
    pub fn reset(&mut self) {
        self.current = self.automaton.initial_state();
    }

    /// See [`Automaton::letter_transition_index`].
    pub fn letter_transition_index(&self, letter: &A::Symbol) -> Result<usize, AutomatonError> {
        self.automaton.letter_transition_index(letter)
    }

    /// See [`Automaton::validate_state`].
    pub fn validate_state(&self, state: &A::State) -> Result<A::State, AutomatonError> {
        self.automaton.validate_state(state)
    }

    /// Compute `δ(state, letter)` without touching the current state.
    pub fn transition(
        &self,
        state: &A::State,
        letter: &A::Symbol,
    ) -> Result<A::State, AutomatonError> {
        self.step(state, letter).map(|step| step.to)
    }

    /// Fold `symbols` through the automaton and commit the final state.
    ///
    /// Starts from `start` when given, else from the current state. On error
    /// the current state is left as it was.
    ///
    /// # Example
    ///
    /// ```rust
    /// use automata::machine::StateMachine;
    /// use automata::mod_three::{ModThree, ModThreeState};
    ///
    /// let mut machine = StateMachine::new(ModThree::new());
    ///
    /// assert_eq!(machine.run_sequence(&[1, 1], None), Ok(ModThreeState::S0));
    /// assert_eq!(machine.run_sequence(&[1], None), Ok(ModThreeState::S1));
    ///
    /// assert!(machine.run_sequence(&[0, 2], None).is_err());
    /// assert_eq!(machine.current_state(), &ModThreeState::S1);
    /// ```
    pub fn run_sequence(
        &mut self,
        symbols: &[A::Symbol],
        start: Option<A::State>,
    ) -> Result<A::State, AutomatonError> {
        let start = self.resolve_start(start)?;
        tracing::debug!(
            automaton = self.automaton.name(),
            start = start.name(),
            symbols = symbols.len(),
            "running sequence"
        );

        let result = symbols
            .iter()
            .try_fold(start, |state, letter| self.transition(&state, letter));

        self.commit(result)
    }

    /// Like [`run_sequence`](Self::run_sequence), but return every step taken.
    pub fn run_traced(
        &mut self,
        symbols: &[A::Symbol],
        start: Option<A::State>,
    ) -> Result<Trace<A::State>, AutomatonError> {
        let start = self.resolve_start(start)?;
        tracing::debug!(
            automaton = self.automaton.name(),
            start = start.name(),
            symbols = symbols.len(),
            "running traced sequence"
        );

        let mut trace = Trace::starting_at(start);
        for letter in symbols {
            match self.step(trace.final_state(), letter) {
                Ok(step) => trace.push(step),
                Err(e) => {
                    tracing::debug!(automaton = self.automaton.name(), error = %e, "run rejected");
                    return Err(e);
                }
            }
        }

        self.commit(Ok(trace.final_state().clone()))?;
        Ok(trace)
    }

    fn resolve_start(&self, start: Option<A::State>) -> Result<A::State, AutomatonError> {
        let start = start.as_ref().unwrap_or(&self.current);
        self.automaton.validate_state(start)
    }

    fn step(&self, state: &A::State, letter: &A::Symbol) -> Result<Step<A::State>, AutomatonError> {
        let from = self.automaton.validate_state(state)?;
        let symbol_index = self.automaton.letter_transition_index(letter)?;

        let row = self
            .automaton
            .table()
            .row(&from)
            .ok_or_else(|| AutomatonError::invalid_state(&from))?;
        let to = row
            .get(symbol_index)
            .cloned()
            .ok_or_else(|| AutomatonError::invalid_symbol(letter))?;

        tracing::trace!(from = from.name(), symbol_index, to = to.name(), "transition");
        Ok(Step {
            from,
            symbol_index,
            to,
        })
    }

    fn commit(
        &mut self,
        result: Result<A::State, AutomatonError>,
    ) -> Result<A::State, AutomatonError> {
        match result {
            Ok(final_state) => {
                tracing::debug!(
                    automaton = self.automaton.name(),
                    final_state = final_state.name(),
                    "sequence committed"
                );
                self.current = final_state.clone();
                Ok(final_state)
            }
            Err(e) => {
                tracing::debug!(automaton = self.automaton.name(), error = %e, "run rejected");
                Err(e)
            }
        }
    }
}
