//! Builder for transition tables.

use crate::builder::error::BuildError;
use crate::core::{State, TransitionTable};

/// Builder for constructing a [`TransitionTable`] with a fluent API.
///
/// Rows are collected as given and checked together in [`build`](Self::build),
/// so a table can be declared in any order.
pub struct TransitionTableBuilder<S: State> {
    alphabet_size: usize,
    rows: Vec<(S, Vec<S>)>,
}

impl<S: State> TransitionTableBuilder<S> {
    /// Create a builder for an alphabet of `alphabet_size` symbols.
    pub fn new(alphabet_size: usize) -> Self {
        Self {
            alphabet_size,
            rows: Vec::new(),
        }
    }

    /// Declare the next states of `state`, ordered by alphabet index.
    pub fn row(mut self, state: S, next: impl IntoIterator<Item = S>) -> Self {
        self.rows.push((state, next.into_iter().collect()));
        self
    }

    /// Build the table, checking that `δ` is total over the declared states.
    pub fn build(self) -> Result<TransitionTable<S>, BuildError> {
        if self.alphabet_size == 0 {
            return Err(BuildError::EmptyAlphabet);
        }
        if self.rows.is_empty() {
            return Err(BuildError::NoStates);
        }

        for (i, (state, next)) in self.rows.iter().enumerate() {
            if self.rows[..i].iter().any(|(earlier, _)| earlier == state) {
                return Err(BuildError::DuplicateRow {
                    state: state.name().to_string(),
                });
            }
            if next.len() != self.alphabet_size {
                return Err(BuildError::WrongArity {
                    state: state.name().to_string(),
                    expected: self.alphabet_size,
                    found: next.len(),
                });
            }
        }

        for (state, next) in &self.rows {
            if let Some(target) = next
                .iter()
                .find(|target| !self.rows.iter().any(|(s, _)| s == *target))
            {
                return Err(BuildError::UnknownTarget {
                    state: state.name().to_string(),
                    target: target.name().to_string(),
                });
            }
        }

        Ok(TransitionTable::from_rows(self.alphabet_size, self.rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;

    state_enum! {
        enum Door {
            Open,
            Closed,
            Locked,
        }
        accepting: [Closed, Locked]
    }

    #[test]
    fn builds_total_table() {
        let table = TransitionTableBuilder::new(2)
            .row(Door::Open, [Door::Closed, Door::Open])
            .row(Door::Closed, [Door::Locked, Door::Open])
            .row(Door::Locked, [Door::Locked, Door::Closed])
            .build()
            .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.next(&Door::Closed, 0), Some(&Door::Locked));
    }

    #[test]
    fn rejects_empty_alphabet() {
        let result = TransitionTableBuilder::new(0)
            .row(Door::Open, [])
            .build();
        assert_eq!(result.unwrap_err(), BuildError::EmptyAlphabet);
    }

    #[test]
    fn rejects_missing_rows() {
        let result = TransitionTableBuilder::<Door>::new(1).build();
        assert_eq!(result.unwrap_err(), BuildError::NoStates);
    }

    #[test]
    fn rejects_duplicate_row() {
        let result = TransitionTableBuilder::new(1)
            .row(Door::Open, [Door::Open])
            .row(Door::Open, [Door::Open])
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateRow {
                state: "Open".to_string()
            }
        );
    }

    #[test]
    fn rejects_short_row() {
        let result = TransitionTableBuilder::new(2)
            .row(Door::Open, [Door::Open])
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::WrongArity {
                state: "Open".to_string(),
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn rejects_target_without_row() {
        let result = TransitionTableBuilder::new(1)
            .row(Door::Open, [Door::Closed])
            .row(Door::Closed, [Door::Locked])
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::UnknownTarget {
                state: "Closed".to_string(),
                target: "Locked".to_string(),
            }
        );
    }
}
