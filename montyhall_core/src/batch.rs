//! Batch aggregation: n trials collected into one 2n-row result.

use crate::error::GameError;
use crate::stats::ContingencyTable;
use crate::trial::{play_game, TrialResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Batch size used when the caller has no preference.
pub const DEFAULT_TRIALS: usize = 100;

/// Every row produced by a batch, two per trial.
///
/// Rows are appended trial by trial; within a strategy they are
/// exchangeable, so merged batches need not preserve order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    rows: Vec<TrialResult>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the row buffer for `trials` trials.
    pub fn with_capacity(trials: usize) -> Self {
        Self {
            rows: Vec::with_capacity(trials * 2),
        }
    }

    /// Appends the two rows of one trial.
    pub fn push_trial(&mut self, results: [TrialResult; 2]) {
        self.rows.extend(results);
    }

    /// Concatenates another batch onto this one.
    pub fn merge(&mut self, other: BatchResult) {
        self.rows.extend(other.rows);
    }

    pub fn rows(&self) -> &[TrialResult] {
        &self.rows
    }

    /// Number of rows (2 per trial).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of trials contained.
    pub fn trials(&self) -> usize {
        self.rows.len() / 2
    }

    /// Tabulates the rows by strategy and outcome.
    pub fn contingency(&self) -> ContingencyTable {
        ContingencyTable::from_results(&self.rows)
    }
}

impl FromIterator<[TrialResult; 2]> for BatchResult {
    fn from_iter<I: IntoIterator<Item = [TrialResult; 2]>>(iter: I) -> Self {
        let mut batch = BatchResult::new();
        for results in iter {
            batch.push_trial(results);
        }
        batch
    }
}

impl IntoIterator for BatchResult {
    type Item = TrialResult;
    type IntoIter = std::vec::IntoIter<TrialResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// Plays `n` games from a single random stream.
///
/// Returns the un-aggregated 2n rows; call [`BatchResult::contingency`] for
/// the table.
pub fn play_n_games<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<BatchResult, GameError> {
    if n == 0 {
        return Err(GameError::EmptyBatch);
    }

    let mut batch = BatchResult::with_capacity(n);
    for _ in 0..n {
        batch.push_trial(play_game(rng));
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::door::Strategy;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_batch_has_two_rows_per_trial() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let batch = play_n_games(DEFAULT_TRIALS, &mut rng).unwrap();
        assert_eq!(batch.len(), 2 * DEFAULT_TRIALS);
        assert_eq!(batch.trials(), DEFAULT_TRIALS);

        let table = batch.contingency();
        assert_eq!(table.total(Strategy::Stay), DEFAULT_TRIALS as u64);
        assert_eq!(table.total(Strategy::Switch), DEFAULT_TRIALS as u64);
    }

    #[test]
    fn test_empty_batch_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(play_n_games(0, &mut rng), Err(GameError::EmptyBatch));
    }

    #[test]
    fn test_large_batch_converges() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let batch = play_n_games(10_000, &mut rng).unwrap();
        let p = batch.contingency().proportions();
        assert!((p.win_rate(Strategy::Stay) - 0.33).abs() <= 0.03, "stay {:?}", p.stay);
        assert!((p.win_rate(Strategy::Switch) - 0.67).abs() <= 0.03, "switch {:?}", p.switch);
    }

    #[test]
    fn test_same_seed_same_batch() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(99);
        let mut rng2 = ChaCha8Rng::seed_from_u64(99);
        assert_eq!(
            play_n_games(500, &mut rng1).unwrap(),
            play_n_games(500, &mut rng2).unwrap()
        );
    }

    #[test]
    fn test_merge_concatenates() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut a = play_n_games(3, &mut rng).unwrap();
        let b = play_n_games(4, &mut rng).unwrap();
        a.merge(b);
        assert_eq!(a.trials(), 7);
    }
}
