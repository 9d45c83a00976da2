//! Core State trait for automaton states.
//!
//! All automaton states must implement this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for automaton states.
///
/// States are immutable values drawn from a finite set `Q`. Which values
/// actually belong to `Q` is decided by the automaton, not by the type:
/// see [`Automaton::validate_state`](crate::machine::Automaton::validate_state).
///
/// # Required Traits
///
/// - `Clone`: States are copied into traces and checkpoints
/// - `PartialEq`: States are looked up in the transition table
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for checkpoints
///
/// # Example
///
/// ```rust
/// use automata::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Parity {
///     Even,
///     Odd,
/// }
///
/// impl State for Parity {
///     fn name(&self) -> &str {
///         match self {
///             Self::Even => "Even",
///             Self::Odd => "Odd",
///         }
///     }
///
///     fn is_accepting(&self) -> bool {
///         matches!(self, Self::Even)
///     }
/// }
///
/// assert!(Parity::Even.is_accepting());
/// assert!(!Parity::Odd.is_accepting());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this state is in the accepting set `F`.
    ///
    /// Default implementation returns `false`.
    fn is_accepting(&self) -> bool {
        false
    }
}
