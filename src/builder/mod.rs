//! Builder API for ergonomic automaton construction.
//!
//! This module provides fluent builders and a macro for declaring
//! automata with minimal boilerplate. Builders check the structural
//! invariants once, so the engine never sees an ill-formed table.

pub mod error;
pub mod machine;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use table::TransitionTableBuilder;
