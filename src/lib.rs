//! Automata: generic deterministic finite automata
//!
//! An automaton is a 5-tuple `(Q, Σ, q0, F, δ)`. This crate splits it into
//! a pure definition (states, a validated transition table, and the
//! [`Automaton`] capability set) and a small engine,
//! [`StateMachine`], that owns the only mutable piece: the current state.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **Transition Table**: The total function `δ`, checked when built
//! - **State Machine**: Folds symbol sequences, committing only on success
//! - **Checkpoint**: Serializable snapshot of a machine's position
//!
//! # Example
//!
//! ```rust
//! use automata::mod_three::{binary_remainder, binary_remainder_str};
//!
//! assert_eq!(binary_remainder(&[1, 1, 0, 1]), Ok(1));
//! assert_eq!(binary_remainder_str("1110"), Ok(2));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod machine;
pub mod mod_three;
pub mod threshold;

// Re-export commonly used types
pub use crate::core::{State, Step, Trace, TransitionTable};
pub use machine::{Automaton, AutomatonError, StateMachine};
