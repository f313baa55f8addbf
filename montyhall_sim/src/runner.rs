//! Batch runner - plays a configured number of trials and judges the result.

use crate::error::SimError;
use crate::oracle::{Oracle, Verdict};
use crate::report::{write_table, TableRenderer};

use montyhall_core::{
    play_n_games, simulate_trial, BatchResult, ContingencyTable, Strategy, Trial, DEFAULT_TRIALS,
};
use montyhall_env::{GameContext, SeededContext};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Master seed for determinism
    pub seed: u64,

    /// Number of trials (each trial yields one stay row and one switch row)
    pub trials: usize,

    /// Spread trials across the rayon pool
    pub parallel: bool,

    /// Allowed absolute deviation of each win rate from the exact value
    /// (None = three standard errors)
    pub tolerance: Option<f64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            trials: DEFAULT_TRIALS,
            parallel: false,
            tolerance: None,
        }
    }
}

/// Metrics collected during a run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunMetrics {
    /// Wall time spent playing trials
    pub elapsed_secs: f64,

    /// Throughput
    pub trials_per_sec: f64,

    /// Trials where the first pick was the car and the host had two doors to choose from
    pub host_choices: u64,
}

/// Results from a batch run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Seed used
    pub seed: u64,

    /// Trials played
    pub trials: usize,

    /// All 2n rows
    pub batch: BatchResult,

    /// Counts per strategy and outcome
    pub table: ContingencyTable,

    /// Comparison against the exact probabilities
    pub verdict: Verdict,

    /// Whether both win rates fell within tolerance
    pub passed: bool,

    /// Failure message if any
    pub failure_reason: Option<String>,

    /// Metrics collected during run
    pub metrics: RunMetrics,
}

/// Runs batches of trials.
pub struct BatchRunner {
    config: RunConfig,
    oracle: Oracle,
}

impl BatchRunner {
    /// Creates a new batch runner.
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            oracle: Oracle::exact(),
        }
    }

    /// Sets the number of trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.config.trials = trials;
        self
    }

    /// Enables or disables parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Sets an explicit tolerance for the verdict.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = Some(tolerance);
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs against a [`SeededContext`] built from the configured seed.
    pub fn run_seeded(&self) -> Result<RunResult, SimError> {
        self.run(&SeededContext::new(self.config.seed))
    }

    /// Plays the configured batch and returns the result.
    ///
    /// Trial `i` always draws from `ctx.trial_rng(i)`, so a seeded context
    /// yields the same batch whether or not the run is parallel.
    pub fn run<C: GameContext>(&self, ctx: &C) -> Result<RunResult, SimError> {
        let n = self.config.trials;
        if n == 0 {
            return Err(montyhall_core::GameError::EmptyBatch.into());
        }
        if let Some(tolerance) = self.config.tolerance {
            if !(tolerance > 0.0 && tolerance < 1.0) {
                return Err(SimError::config(format!("tolerance must be in (0, 1), got {}", tolerance)));
            }
        }

        info!(
            "Starting batch: {} trials (seed={}, parallel={})",
            n,
            ctx.seed(),
            self.config.parallel
        );

        let start = Instant::now();
        let trials: Vec<Trial> = if self.config.parallel {
            (0..n as u64)
                .into_par_iter()
                .map(|i| simulate_trial(&mut ctx.trial_rng(i)))
                .collect()
        } else {
            (0..n as u64)
                .map(|i| simulate_trial(&mut ctx.trial_rng(i)))
                .collect()
        };
        let elapsed = start.elapsed().as_secs_f64();

        let host_choices = trials.iter().filter(|t| t.host_had_choice()).count() as u64;
        let batch: BatchResult = trials.iter().map(Trial::results).collect();
        let table = batch.contingency();

        debug!(
            "  stay: {} win / {} lose | switch: {} win / {} lose",
            table.stay.win, table.stay.lose, table.switch.win, table.switch.lose
        );

        let verdict = self.oracle.check(&table, self.config.tolerance);
        let passed = verdict.passed();
        let failure_reason = verdict.failure_reason();

        if passed {
            info!(
                "Batch done: stay={:.4} switch={:.4} in {:.3}s",
                table.win_rate(Strategy::Stay),
                table.win_rate(Strategy::Switch),
                elapsed
            );
        } else {
            warn!("Batch outside tolerance: {}", failure_reason.as_deref().unwrap_or("unknown"));
        }

        Ok(RunResult {
            seed: ctx.seed(),
            trials: n,
            batch,
            table,
            verdict,
            passed,
            failure_reason,
            metrics: RunMetrics {
                elapsed_secs: elapsed,
                trials_per_sec: if elapsed > 0.0 { n as f64 / elapsed } else { 0.0 },
                host_choices,
            },
        })
    }
}

/// Plays `n` games from the context's single stream, writes the
/// row-normalized table through `renderer` to `out`, and returns the raw rows.
pub fn play_and_report<C, T, W>(n: usize, ctx: &C, renderer: &T, out: &mut W) -> Result<BatchResult, SimError>
where
    C: GameContext,
    T: TableRenderer + ?Sized,
    W: Write,
{
    let mut rng = ctx.rng();
    let batch = play_n_games(n, &mut rng)?;
    write_table(renderer, &batch.contingency().proportions(), out)?;
    Ok(batch)
}
