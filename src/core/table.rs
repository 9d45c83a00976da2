//! Transition tables.
//!
//! A table is the total function `δ: Q × Σ → Q` of one automaton, stored as
//! one row per state with the next states ordered by alphabet index.

use super::state::State;

/// A validated transition table.
///
/// Tables are built with [`TransitionTableBuilder`](crate::builder::TransitionTableBuilder),
/// which guarantees that every state has a row, every row has exactly
/// `alphabet_size` entries, and every entry is itself a state with a row.
///
/// # Example
///
/// ```rust
/// use automata::builder::TransitionTableBuilder;
/// use automata::state_enum;
///
/// state_enum! {
///     enum Parity {
///         Even,
///         Odd,
///     }
///     accepting: [Even]
/// }
///
/// let table = TransitionTableBuilder::new(2)
///     .row(Parity::Even, [Parity::Even, Parity::Odd])
///     .row(Parity::Odd, [Parity::Odd, Parity::Even])
///     .build()
///     .unwrap();
///
/// assert_eq!(table.next(&Parity::Odd, 1), Some(&Parity::Even));
/// assert!(table.contains(&Parity::Odd));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionTable<S: State> {
    alphabet_size: usize,
    rows: Vec<(S, Vec<S>)>,
}

impl<S: State> TransitionTable<S> {
    /// Rows must already satisfy the table invariants.
    pub(crate) fn from_rows(alphabet_size: usize, rows: Vec<(S, Vec<S>)>) -> Self {
        Self {
            alphabet_size,
            rows,
        }
    }

    /// Number of symbols in the alphabet, i.e. the length of every row.
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Number of states in `Q`.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// States in the order their rows were declared.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.rows.iter().map(|(state, _)| state)
    }

    /// Check whether `state` is a member of `Q`.
    pub fn contains(&self, state: &S) -> bool {
        self.row(state).is_some()
    }

    /// The next states of `state`, indexed by alphabet position.
    pub fn row(&self, state: &S) -> Option<&[S]> {
        self.rows
            .iter()
            .find(|(from, _)| from == state)
            .map(|(_, next)| next.as_slice())
    }

    /// Look up `δ(state, index)`.
    pub fn next(&self, state: &S, index: usize) -> Option<&S> {
        self.row(state).and_then(|next| next.get(index))
    }
}
