//! Core automaton types.
//!
//! This module contains the pure data of an automaton:
//! - State definitions via the `State` trait
//! - Validated transition tables
//! - Immutable run traces
//!
//! Nothing in this module mutates shared state; the engine in
//! [`machine`](crate::machine) owns the only mutable cell.

mod history;
mod state;
mod table;

pub use history::{Step, Trace};
pub use state::State;
pub use table::TransitionTable;
