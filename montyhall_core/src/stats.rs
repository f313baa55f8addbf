//! Strategy × Outcome tabulation.
//!
//! Counts are kept exact; proportions are derived on demand and rounded to
//! two decimals only in [`ProportionTable`], which is what gets reported.

use crate::door::{Outcome, Strategy};
use crate::trial::TrialResult;
use serde::{Deserialize, Serialize};

/// Win/lose tally for one strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub win: u64,
    pub lose: u64,
}

impl OutcomeCounts {
    pub fn total(&self) -> u64 {
        self.win + self.lose
    }

    fn get(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Win => self.win,
            Outcome::Lose => self.lose,
        }
    }

    fn get_mut(&mut self, outcome: Outcome) -> &mut u64 {
        match outcome {
            Outcome::Win => &mut self.win,
            Outcome::Lose => &mut self.lose,
        }
    }

    /// Unrounded share of `outcome`; 0.0 for an empty row.
    fn share(&self, outcome: Outcome) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.get(outcome) as f64 / total as f64
        }
    }
}

/// Raw counts, one row per strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContingencyTable {
    pub stay: OutcomeCounts,
    pub switch: OutcomeCounts,
}

impl ContingencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tallies a sequence of result rows.
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a TrialResult>,
    {
        let mut table = Self::new();
        for result in results {
            table.record(*result);
        }
        table
    }

    /// Adds one row.
    pub fn record(&mut self, result: TrialResult) {
        *self.row_mut(result.strategy).get_mut(result.outcome) += 1;
    }

    /// Adds another table's counts into this one.
    pub fn merge(&mut self, other: &ContingencyTable) {
        for strategy in Strategy::ALL {
            let theirs = *other.row(strategy);
            let ours = self.row_mut(strategy);
            ours.win += theirs.win;
            ours.lose += theirs.lose;
        }
    }

    pub fn row(&self, strategy: Strategy) -> &OutcomeCounts {
        match strategy {
            Strategy::Stay => &self.stay,
            Strategy::Switch => &self.switch,
        }
    }

    fn row_mut(&mut self, strategy: Strategy) -> &mut OutcomeCounts {
        match strategy {
            Strategy::Stay => &mut self.stay,
            Strategy::Switch => &mut self.switch,
        }
    }

    pub fn count(&self, strategy: Strategy, outcome: Outcome) -> u64 {
        self.row(strategy).get(outcome)
    }

    /// Number of rows recorded for `strategy`.
    pub fn total(&self, strategy: Strategy) -> u64 {
        self.row(strategy).total()
    }

    /// Row-normalized share of `outcome` within `strategy`, unrounded.
    pub fn proportion(&self, strategy: Strategy, outcome: Outcome) -> f64 {
        self.row(strategy).share(outcome)
    }

    /// Same as [`proportion`](Self::proportion), rounded to 2 decimal places.
    pub fn rounded_proportion(&self, strategy: Strategy, outcome: Outcome) -> f64 {
        round2(self.proportion(strategy, outcome))
    }

    /// Unrounded win rate for `strategy`.
    pub fn win_rate(&self, strategy: Strategy) -> f64 {
        self.proportion(strategy, Outcome::Win)
    }

    /// Row-normalized table rounded to 2 decimal places.
    pub fn proportions(&self) -> ProportionTable {
        let row = |strategy| OutcomeProportions {
            win: self.rounded_proportion(strategy, Outcome::Win),
            lose: self.rounded_proportion(strategy, Outcome::Lose),
        };
        ProportionTable {
            stay: row(Strategy::Stay),
            switch: row(Strategy::Switch),
        }
    }
}

/// Rounded win/lose shares for one strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeProportions {
    pub win: f64,
    pub lose: f64,
}

impl OutcomeProportions {
    pub fn get(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Win => self.win,
            Outcome::Lose => self.lose,
        }
    }
}

/// The reported 2×2 table: each row sums to 1.0 up to rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProportionTable {
    pub stay: OutcomeProportions,
    pub switch: OutcomeProportions,
}

impl ProportionTable {
    pub fn row(&self, strategy: Strategy) -> &OutcomeProportions {
        match strategy {
            Strategy::Stay => &self.stay,
            Strategy::Switch => &self.switch,
        }
    }

    pub fn get(&self, strategy: Strategy, outcome: Outcome) -> f64 {
        self.row(strategy).get(outcome)
    }

    pub fn win_rate(&self, strategy: Strategy) -> f64 {
        self.get(strategy, Outcome::Win)
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rows(stay_wins: u64, stay_losses: u64, switch_wins: u64, switch_losses: u64) -> Vec<TrialResult> {
        let mut out = Vec::new();
        let mut push = |strategy, outcome, n| {
            for _ in 0..n {
                out.push(TrialResult::new(strategy, outcome));
            }
        };
        push(Strategy::Stay, Outcome::Win, stay_wins);
        push(Strategy::Stay, Outcome::Lose, stay_losses);
        push(Strategy::Switch, Outcome::Win, switch_wins);
        push(Strategy::Switch, Outcome::Lose, switch_losses);
        out
    }

    #[test]
    fn test_counts_and_totals() {
        let table = ContingencyTable::from_results(&rows(1, 2, 2, 1));
        assert_eq!(table.count(Strategy::Stay, Outcome::Win), 1);
        assert_eq!(table.count(Strategy::Stay, Outcome::Lose), 2);
        assert_eq!(table.total(Strategy::Switch), 3);
    }

    #[test]
    fn test_proportions_rounded_to_two_places() {
        let table = ContingencyTable::from_results(&rows(1, 2, 2, 1));
        assert_relative_eq!(table.win_rate(Strategy::Stay), 1.0 / 3.0);
        let p = table.proportions();
        assert_eq!(p.get(Strategy::Stay, Outcome::Win), 0.33);
        assert_eq!(p.get(Strategy::Stay, Outcome::Lose), 0.67);
        assert_eq!(p.win_rate(Strategy::Switch), 0.67);
        assert_eq!(p.get(Strategy::Switch, Outcome::Lose), 0.33);
    }

    #[test]
    fn test_rows_sum_to_one() {
        let table = ContingencyTable::from_results(&rows(37, 63, 71, 29));
        let p = table.proportions();
        for strategy in Strategy::ALL {
            let row = p.row(strategy);
            assert_relative_eq!(row.win + row.lose, 1.0, epsilon = 0.01);
        }
    }

    #[test]
    fn test_empty_row_is_zero() {
        let table = ContingencyTable::new();
        assert_eq!(table.proportion(Strategy::Stay, Outcome::Win), 0.0);
        assert_eq!(table.proportions(), ProportionTable::default());
    }

    #[test]
    fn test_merge_adds_counts() {
        let mut a = ContingencyTable::from_results(&rows(1, 0, 0, 1));
        let b = ContingencyTable::from_results(&rows(0, 2, 2, 0));
        a.merge(&b);
        assert_eq!(a, ContingencyTable::from_results(&rows(1, 2, 2, 1)));
    }
}
