//! Run traces.
//!
//! Provides immutable tracking of the transitions taken while folding
//! a symbol sequence through an automaton.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Record of a single transition.
///
/// # Example
///
/// ```rust
/// use automata::core::Step;
/// use automata::mod_three::ModThreeState;
///
/// let step = Step {
///     from: ModThreeState::S1,
///     symbol_index: 0,
///     to: ModThreeState::S2,
/// };
/// assert_eq!(step.symbol_index, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Step<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// Position of the consumed symbol in the alphabet
    pub symbol_index: usize,
    /// The state being transitioned to
    pub to: S,
}

/// Ordered trace of the steps of one run.
///
/// Traces are produced by
/// [`StateMachine::run_traced`](crate::machine::StateMachine::run_traced)
/// and are read-only once returned.
///
/// # Example
///
/// ```rust
/// use automata::machine::StateMachine;
/// use automata::mod_three::{ModThree, ModThreeState};
///
/// let mut machine = StateMachine::new(ModThree::new());
/// let trace = machine.run_traced(&[1, 1], None).unwrap();
///
/// assert_eq!(trace.get_path().len(), 3);
/// assert_eq!(trace.final_state(), &ModThreeState::S0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Trace<S: State> {
    start: S,
    steps: Vec<Step<S>>,
}

impl<S: State> Trace<S> {
    /// Create an empty trace positioned at `start`.
    pub fn starting_at(start: S) -> Self {
        Self {
            start,
            steps: Vec::new(),
        }
    }

    /// Append a step. Only the engine extends a trace, while no one else
    /// can observe it yet.
    pub(crate) fn push(&mut self, step: Step<S>) {
        self.steps.push(step);
    }

    /// The state the run started from.
    pub fn start(&self) -> &S {
        &self.start
    }

    /// The state the run ended in; the start state when no step was taken.
    pub fn final_state(&self) -> &S {
        self.steps.last().map_or(&self.start, |step| &step.to)
    }

    /// Get the path of states traversed: the start state, then the
    /// `to` state of each step.
    pub fn get_path(&self) -> Vec<&S> {
        std::iter::once(&self.start)
            .chain(self.steps.iter().map(|step| &step.to))
            .collect()
    }

    /// Get all steps in order.
    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }
}
