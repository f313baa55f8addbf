//! Exact-probability oracle.
//!
//! The Oracle holds the "God's eye view" of the game: instead of sampling, it
//! walks every branch (car position, first pick, host coin) with its weight
//! and sums the winning mass per strategy. Empirical tables are then judged
//! against these exact values.

use montyhall_core::{
    ContingencyTable, DoorContent, DoorPosition, GameAssignment, Strategy, Trial,
};
use serde::{Deserialize, Serialize};

/// Number of standard errors allowed when no explicit tolerance is given.
const DEFAULT_SIGMAS: f64 = 3.0;

/// Exact win probabilities for both strategies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oracle {
    stay_win: f64,
    switch_win: f64,
}

impl Oracle {
    /// Computes the exact probabilities by full enumeration.
    pub fn exact() -> Self {
        let mut stay_win = 0.0;
        let mut switch_win = 0.0;

        for assignment in GameAssignment::all() {
            for pick in DoorPosition::ALL {
                let branch = 1.0 / 9.0;
                let openable: Vec<DoorPosition> = DoorPosition::ALL
                    .into_iter()
                    .filter(|&d| d != pick && assignment.content_at(d) == DoorContent::Goat)
                    .collect();

                // Host picks uniformly among the doors it may open
                let weight = branch / openable.len() as f64;
                for opened in openable {
                    let trial = Trial::score(assignment, pick, opened);
                    if trial.outcome(Strategy::Stay).is_win() {
                        stay_win += weight;
                    }
                    if trial.outcome(Strategy::Switch).is_win() {
                        switch_win += weight;
                    }
                }
            }
        }

        Self { stay_win, switch_win }
    }

    /// Exact probability that `strategy` wins.
    pub fn win_probability(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Stay => self.stay_win,
            Strategy::Switch => self.switch_win,
        }
    }

    /// Judges an empirical table.
    ///
    /// With `tolerance = None` each row is allowed three standard errors of
    /// its own sample size.
    pub fn check(&self, table: &ContingencyTable, tolerance: Option<f64>) -> Verdict {
        let judge = |strategy| {
            let expected = self.win_probability(strategy);
            let n = table.total(strategy);
            let allowed = tolerance.unwrap_or_else(|| standard_error(expected, n) * DEFAULT_SIGMAS);
            let observed = table.win_rate(strategy);
            let deviation = (observed - expected).abs();
            StrategyCheck {
                strategy,
                expected,
                observed,
                deviation,
                tolerance: allowed,
                within_tolerance: n > 0 && deviation <= allowed,
            }
        };

        Verdict {
            stay: judge(Strategy::Stay),
            switch: judge(Strategy::Switch),
        }
    }
}

fn standard_error(p: f64, n: u64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    (p * (1.0 - p) / n as f64).sqrt()
}

/// Empirical vs. exact for one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyCheck {
    pub strategy: Strategy,
    pub expected: f64,
    pub observed: f64,
    pub deviation: f64,
    pub tolerance: f64,
    pub within_tolerance: bool,
}

/// Outcome of [`Oracle::check`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub stay: StrategyCheck,
    pub switch: StrategyCheck,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        self.stay.within_tolerance && self.switch.within_tolerance
    }

    /// Human-readable reason for a failed verdict.
    pub fn failure_reason(&self) -> Option<String> {
        let failures: Vec<String> = [self.stay, self.switch]
            .iter()
            .filter(|c| !c.within_tolerance)
            .map(|c| {
                format!(
                    "{} win rate {:.4} deviates {:.4} from {:.4} (tolerance {:.4})",
                    c.strategy, c.observed, c.deviation, c.expected, c.tolerance
                )
            })
            .collect();

        if failures.is_empty() {
            None
        } else {
            Some(failures.join("; "))
        }
    }
}
