//! Pick a classifier confidence threshold by recall.
//!
//! Inputs are per-threshold counts for the nine confidence thresholds
//! `0.1, 0.2, ..., 0.9`: index `i` holds the counts at threshold `(i + 1) / 10`.
//! Only true positives and false negatives are needed, since
//! `recall = tp / (tp + fn)`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of threshold buckets.
pub const BUCKETS: usize = 9;

/// Recall target used when none is configured.
pub const DEFAULT_RECALL_TARGET: f64 = 0.9;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ThresholdError {
    #[error("Expected 9 true-positive and false-negative counts, got {tp} and {fn_}")]
    InvalidData { tp: usize, fn_: usize },
}

/// Threshold selection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    /// Minimum recall a threshold must reach to qualify.
    pub target: f64,
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_RECALL_TARGET,
        }
    }
}

impl RecallConfig {
    pub fn best_threshold(
        &self,
        true_positives: &[u64],
        false_negatives: &[u64],
    ) -> Result<Option<f64>, ThresholdError> {
        best_recall_threshold(true_positives, false_negatives, self.target)
    }
}

/// Threshold with the highest recall that is at least `recall_target`.
///
/// Returns `None` when no threshold qualifies. On equal recall the lower
/// threshold wins. A bucket with no positives at all has recall `0`.
///
/// # Example
///
/// ```
/// use automata::threshold::best_recall_threshold;
///
/// let tp = [100, 95, 90, 70, 60, 50, 40, 30, 20];
/// let fn_ = [4, 3, 2, 1, 2, 4, 5, 6, 7];
///
/// assert_eq!(best_recall_threshold(&tp, &fn_, 0.9), Ok(Some(0.4)));
/// assert_eq!(best_recall_threshold(&tp, &fn_, 0.99), Ok(None));
/// ```
pub fn best_recall_threshold(
    true_positives: &[u64],
    false_negatives: &[u64],
    recall_target: f64,
) -> Result<Option<f64>, ThresholdError> {
    if true_positives.len() != BUCKETS || false_negatives.len() != BUCKETS {
        return Err(ThresholdError::InvalidData {
            tp: true_positives.len(),
            fn_: false_negatives.len(),
        });
    }

    let mut best: Option<(f64, f64)> = None;
    for (i, (&tp, &fn_)) in true_positives.iter().zip(false_negatives).enumerate() {
        let threshold = (i + 1) as f64 / 10.0;
        let positives = u128::from(tp) + u128::from(fn_);
        let recall = if positives > 0 {
            tp as f64 / positives as f64
        } else {
            0.0
        };

        if recall >= recall_target && best.is_none_or(|(_, best_recall)| recall > best_recall) {
            best = Some((threshold, recall));
        }
    }

    Ok(best.map(|(threshold, _)| threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a_threshold() {
        let tp = [100, 90, 80, 70, 60, 50, 40, 30, 20];
        let fn_ = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(best_recall_threshold(&tp, &fn_, 0.9), Ok(Some(0.1)));
    }

    #[test]
    fn highest_recall_is_last_bucket() {
        let tp = [100, 90, 80, 70, 60, 50, 40, 30, 20];
        let fn_ = [9, 8, 7, 6, 5, 4, 3, 2, 1];
        assert_eq!(best_recall_threshold(&tp, &fn_, 0.9), Ok(Some(0.9)));
    }

    #[test]
    fn realistic_counts() {
        let tp = [100, 95, 90, 70, 60, 50, 40, 30, 20];
        let fn_ = [4, 3, 2, 1, 2, 4, 5, 6, 7];
        assert_eq!(best_recall_threshold(&tp, &fn_, 0.9), Ok(Some(0.4)));
    }

    #[test]
    fn ties_keep_lower_threshold() {
        let tp = [9, 18, 1, 1, 1, 1, 1, 1, 1];
        let fn_ = [1, 2, 9, 9, 9, 9, 9, 9, 9];
        assert_eq!(best_recall_threshold(&tp, &fn_, 0.5), Ok(Some(0.1)));
    }

    #[test]
    fn empty_buckets_have_zero_recall() {
        let tp = [0; 9];
        let fn_ = [0; 9];
        assert_eq!(best_recall_threshold(&tp, &fn_, 0.9), Ok(None));
        assert_eq!(best_recall_threshold(&tp, &fn_, 0.0), Ok(Some(0.1)));
    }

    #[test]
    fn huge_counts_do_not_overflow() {
        let tp = [u64::MAX; 9];
        let fn_ = [1; 9];
        assert_eq!(best_recall_threshold(&tp, &fn_, 0.9), Ok(Some(0.1)));

        let fn_ = [u64::MAX; 9];
        assert_eq!(best_recall_threshold(&tp, &fn_, 0.5), Ok(Some(0.1)));
        assert_eq!(best_recall_threshold(&tp, &fn_, 0.9), Ok(None));
    }

    #[test]
    fn different_lengths_are_rejected() {
        let tp = [100, 90, 80, 70, 60, 50, 40, 30, 20];
        let fn_ = [2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(
            best_recall_threshold(&tp, &fn_, 0.9),
            Err(ThresholdError::InvalidData { tp: 9, fn_: 8 })
        );
    }

    #[test]
    fn short_inputs_are_rejected() {
        let tp = [90, 80, 70, 60, 50, 40, 30, 20];
        let fn_ = [2, 3, 4, 5, 6, 7, 8, 9];
        assert!(best_recall_threshold(&tp, &fn_, 0.9).is_err());
    }

    #[test]
    fn config_defaults_to_ninety_percent() {
        let config: RecallConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RecallConfig::default());
        assert_eq!(config.target, DEFAULT_RECALL_TARGET);
    }

    #[test]
    fn config_applies_target() {
        let config: RecallConfig = serde_json::from_str(r#"{"target":0.99}"#).unwrap();
        let tp = [100, 95, 90, 70, 60, 50, 40, 30, 20];
        let fn_ = [4, 3, 2, 1, 2, 4, 5, 6, 7];
        assert_eq!(config.best_threshold(&tp, &fn_), Ok(None));
    }
}
