//! Checkpoint and restore for state machines.
//!
//! A checkpoint captures where a machine is, not what it is: the automaton
//! definition is code and is supplied again on restore.

use crate::core::State;
use crate::machine::{Automaton, AutomatonError, StateMachine};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a state machine's position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State> {
    /// Checkpoint format version
    pub version: u32,

    /// Name of the automaton the machine runs
    pub automaton: String,

    /// Initial state of the automaton
    pub initial_state: S,

    /// Current state of the machine
    pub current_state: S,
}

impl<S: State> Checkpoint<S> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

impl<A: Automaton> StateMachine<A> {
    /// Capture the machine's current position.
    pub fn checkpoint(&self) -> Checkpoint<A::State> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            automaton: self.automaton.name().to_string(),
            initial_state: self.automaton.initial_state(),
            current_state: self.current.clone(),
        }
    }

    /// Rebuild a machine from `checkpoint`, validating it against `automaton`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use automata::checkpoint::Checkpoint;
    /// use automata::machine::StateMachine;
    /// use automata::mod_three::{ModThree, ModThreeState};
    ///
    /// let mut machine = StateMachine::new(ModThree::new());
    /// machine.run_sequence(&[1, 0], None).unwrap();
    ///
    /// let json = machine.checkpoint().to_json().unwrap();
    /// let restored =
    ///     StateMachine::restore(ModThree::new(), Checkpoint::from_json(&json).unwrap()).unwrap();
    ///
    /// assert_eq!(restored.current_state(), &ModThreeState::S2);
    /// ```
    pub fn restore(
        automaton: A,
        checkpoint: Checkpoint<A::State>,
    ) -> Result<Self, CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if checkpoint.automaton != automaton.name() {
            return Err(CheckpointError::AutomatonMismatch {
                found: checkpoint.automaton,
                expected: automaton.name().to_string(),
            });
        }
        if checkpoint.initial_state != automaton.initial_state() {
            return Err(AutomatonError::invalid_state(&checkpoint.initial_state).into());
        }

        let current = automaton.validate_state(&checkpoint.current_state)?;
        tracing::debug!(
            automaton = automaton.name(),
            current = current.name(),
            "restored from checkpoint"
        );
        Ok(Self { automaton, current })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mod_three::{ModThree, ModThreeState};

    fn advanced_machine() -> StateMachine<ModThree> {
        let mut machine = StateMachine::new(ModThree::new());
        machine.run_sequence(&[1], None).unwrap();
        machine
    }

    #[test]
    fn checkpoint_captures_position() {
        let checkpoint = advanced_machine().checkpoint();

        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.automaton, "mod-three");
        assert_eq!(checkpoint.initial_state, ModThreeState::S0);
        assert_eq!(checkpoint.current_state, ModThreeState::S1);
    }

    #[test]
    fn json_round_trip_restores_state() {
        let json = advanced_machine().checkpoint().to_json().unwrap();
        let checkpoint = Checkpoint::from_json(&json).unwrap();

        let mut machine = StateMachine::restore(ModThree::new(), checkpoint).unwrap();

        assert_eq!(machine.current_state(), &ModThreeState::S1);
        // 1 then 1 is 3
        assert_eq!(machine.run_sequence(&[1], None), Ok(ModThreeState::S0));
    }

    #[test]
    fn binary_round_trip_restores_state() {
        let bytes = advanced_machine().checkpoint().to_bytes().unwrap();
        let checkpoint = Checkpoint::<ModThreeState>::from_bytes(&bytes).unwrap();

        let machine = StateMachine::restore(ModThree::new(), checkpoint).unwrap();

        assert_eq!(machine.current_state(), &ModThreeState::S1);
    }

    #[test]
    fn rejects_unknown_version() {
        let mut checkpoint = advanced_machine().checkpoint();
        checkpoint.version = 99;

        let result = StateMachine::restore(ModThree::new(), checkpoint);

        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion {
                found: 99,
                supported: CHECKPOINT_VERSION
            })
        ));
    }

    #[test]
    fn rejects_foreign_automaton() {
        let mut checkpoint = advanced_machine().checkpoint();
        checkpoint.automaton = "mod-five".to_string();

        let result = StateMachine::restore(ModThree::new(), checkpoint);

        assert!(matches!(
            result,
            Err(CheckpointError::AutomatonMismatch { .. })
        ));
    }

    #[test]
    fn rejects_mismatched_initial_state() {
        let mut checkpoint = advanced_machine().checkpoint();
        checkpoint.initial_state = ModThreeState::S2;

        let result = StateMachine::restore(ModThree::new(), checkpoint);

        assert!(matches!(
            result,
            Err(CheckpointError::InvalidState(AutomatonError::InvalidState { .. }))
        ));
    }

    #[test]
    fn rejects_unknown_state_name() {
        let json = r#"{"version":1,"automaton":"mod-three","initial_state":"S0","current_state":"S7"}"#;

        let result = Checkpoint::<ModThreeState>::from_json(json);

        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn rejects_garbage_bytes() {
        let result = Checkpoint::<ModThreeState>::from_bytes(&[0xff]);
        assert!(result.is_err());
    }
}
