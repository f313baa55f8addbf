//! Monty Hall Simulator CLI
//!
//! Play batches of Monty Hall games and check that switching wins about
//! twice as often as staying.

use clap::Parser;
use montyhall_core::{Strategy, DEFAULT_TRIALS};
use montyhall_env::{GameContext, SeededContext};
use montyhall_sim::report::print_table;
use montyhall_sim::{BatchRunner, RunConfig, RunResult, SimExport, TextRenderer};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Monty Hall Monte Carlo simulator
#[derive(Parser, Debug)]
#[command(name = "montyhall-sim")]
#[command(about = "Simulate the Monty Hall problem under stay and switch strategies", long_about = None)]
struct Args {
    /// Number of trials per run
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Master seed for determinism (0 = random from time)
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Number of consecutive seeds to run (seed, seed+1, ...)
    #[arg(long, default_value = "1")]
    seeds: usize,

    /// Spread trials across all cores
    #[arg(short, long)]
    parallel: bool,

    /// Allowed deviation of each win rate from the exact probability
    /// (default: three standard errors)
    #[arg(long)]
    tolerance: Option<f64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON output for scripting
    #[arg(long)]
    json: bool,

    /// Export the rows and tallies of the last run to a JSON file
    #[arg(long)]
    export: Option<String>,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    if !args.json {
        info!("Monty Hall Simulator v{}", env!("CARGO_PKG_VERSION"));
    }

    // Determine base seed
    let base_seed = if args.seed == 0 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1)
    } else {
        args.seed
    };

    let config = RunConfig {
        seed: base_seed,
        trials: args.trials,
        parallel: args.parallel,
        tolerance: args.tolerance,
    };
    let runner = BatchRunner::new(config);
    let base = SeededContext::new(base_seed);

    let mut all_results: Vec<RunResult> = Vec::new();
    let mut failed_count = 0;

    for seed_offset in 0..args.seeds.max(1) {
        let ctx = base.offset(seed_offset as u64);

        let result = match runner.run(&ctx) {
            Ok(result) => result,
            Err(e) => {
                error!("Run failed (seed={}): {}", ctx.seed(), e);
                std::process::exit(2);
            }
        };

        if !args.json {
            if let Err(e) = print_table(&TextRenderer, &result.table.proportions()) {
                error!("Failed to print table: {}", e);
            }
            if result.passed {
                info!("✓ seed={} PASSED", result.seed);
            } else {
                error!(
                    "✗ seed={} FAILED: {}",
                    result.seed,
                    result.failure_reason.as_deref().unwrap_or("unknown")
                );
            }
        }

        if !result.passed {
            failed_count += 1;
        }
        all_results.push(result);
    }

    if let (Some(path), Some(last)) = (&args.export, all_results.last()) {
        match SimExport::from_run(last).write_to_file(path) {
            Ok(()) => info!("Exported {} rows to {}", last.batch.len(), path),
            Err(e) => error!("Failed to write export: {}", e),
        }
    }

    let total = all_results.len();
    let passed = total - failed_count;

    if args.json {
        let summary = serde_json::json!({
            "total": total,
            "passed": passed,
            "failed": failed_count,
            "results": all_results.iter().map(|r| {
                serde_json::json!({
                    "seed": r.seed,
                    "trials": r.trials,
                    "passed": r.passed,
                    "proportions": r.table.proportions(),
                    "counts": r.table,
                    "metrics": r.metrics,
                    "failure_reason": r.failure_reason,
                })
            }).collect::<Vec<_>>(),
        });
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{}", text),
            Err(e) => error!("Failed to render JSON summary: {}", e),
        }
    } else if total > 1 {
        let mean_switch = all_results
            .iter()
            .map(|r| r.table.win_rate(Strategy::Switch))
            .sum::<f64>()
            / total as f64;
        info!("Mean switch win rate over {} seeds: {:.4}", total, mean_switch);

        if failed_count == 0 {
            info!("✅ All {} runs passed!", total);
        } else {
            error!("❌ {}/{} runs failed!", failed_count, total);
            for result in all_results.iter().filter(|r| !r.passed) {
                error!(
                    "  - seed={}: {}",
                    result.seed,
                    result.failure_reason.as_deref().unwrap_or("unknown")
                );
            }
        }
    }

    // Exit with proper code for CI
    if failed_count > 0 {
        std::process::exit(1);
    }
}
