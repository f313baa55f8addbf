//! JSON exporter for batch runs.
//!
//! Writes the raw rows alongside the tallies so a run can be re-analysed
//! outside the simulator.

use crate::error::SimError;
use crate::oracle::Verdict;
use crate::runner::RunResult;
use montyhall_core::{ContingencyTable, ProportionTable, TrialResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Complete batch export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimExport {
    /// Seed used (0 = entropy)
    pub seed: u64,

    /// Number of trials
    pub trials: usize,

    /// Whether the verdict passed
    pub passed: bool,

    /// Raw counts
    pub counts: ContingencyTable,

    /// Row-normalized, rounded table
    pub proportions: ProportionTable,

    /// Comparison against the exact probabilities
    pub verdict: Verdict,

    /// All 2n rows, trial order
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub rows: Vec<TrialResult>,
}

impl SimExport {
    /// Builds an export from a finished run.
    pub fn from_run(result: &RunResult) -> Self {
        Self {
            seed: result.seed,
            trials: result.trials,
            passed: result.passed,
            counts: result.table,
            proportions: result.table.proportions(),
            verdict: result.verdict,
            rows: result.batch.rows().to_vec(),
        }
    }

    /// Drops the raw rows, keeping only the tallies.
    pub fn summary_only(mut self) -> Self {
        self.rows.clear();
        self
    }

    /// Serializes to pretty JSON.
    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), SimError> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{BatchRunner, RunConfig};
    use montyhall_env::SeededContext;

    fn run() -> RunResult {
        BatchRunner::new(RunConfig::default())
            .with_trials(20)
            .run(&SeededContext::new(42))
            .unwrap()
    }

    #[test]
    fn test_export_roundtrips_through_json() {
        let export = SimExport::from_run(&run());
        let parsed: SimExport = serde_json::from_str(&export.to_json().unwrap()).unwrap();

        assert_eq!(parsed.seed, 42);
        assert_eq!(parsed.trials, 20);
        assert_eq!(parsed.rows, export.rows);
        assert_eq!(parsed.counts, export.counts);
    }

    #[test]
    fn test_summary_only_omits_rows() {
        let json = SimExport::from_run(&run()).summary_only().to_json().unwrap();
        assert!(!json.contains("\"rows\""));
    }

    #[test]
    fn test_write_to_file() {
        let path = std::env::temp_dir().join(format!("montyhall_export_{}.json", std::process::id()));
        SimExport::from_run(&run()).write_to_file(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(text.contains("\"proportions\""));
    }
}
