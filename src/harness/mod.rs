//! Repeated-run harness
//!
//! Executes warm-up runs, then measured runs, checks that every run produces
//! the same total, and summarizes wall-clock timings.

pub mod report;
pub mod stats;

pub use report::{BenchmarkReport, BuildInfo};
pub use stats::TimingStats;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::benchmark::{run, BenchmarkConfig, ProgressReporter, RunOutcome, SilentReporter};
use crate::common::constants::{DEFAULT_MEASURED_RUNS, DEFAULT_WARMUP_RUNS};
use crate::common::error::{BenchError, BenchResult};
use crate::config_err;

/// How many times to run the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    pub warmup_runs: usize,
    pub measured_runs: usize,
}

impl HarnessConfig {
    /// A single measured run with no warm-up
    pub fn single() -> Self {
        Self {
            warmup_runs: 0,
            measured_runs: 1,
        }
    }

    pub fn validate(&self) -> BenchResult<()> {
        if self.measured_runs == 0 {
            return Err(config_err!("at least one measured run is required"));
        }
        Ok(())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            warmup_runs: DEFAULT_WARMUP_RUNS,
            measured_runs: DEFAULT_MEASURED_RUNS,
        }
    }
}

/// All measured runs of one harness invocation
#[derive(Debug, Clone)]
pub struct HarnessOutcome {
    pub total: i64,
    pub runs: Vec<RunOutcome>,
    pub timing: TimingStats,
}

/// Run the benchmark under `harness`.
///
/// Only the first measured run reports through `reporter`; warm-up runs and
/// later measured runs are silent so the visible output is that of a single
/// run.
pub fn run_harness<R: ProgressReporter + ?Sized>(
    config: &BenchmarkConfig,
    harness: &HarnessConfig,
    reporter: &mut R,
) -> BenchResult<HarnessOutcome> {
    config.validate()?;
    harness.validate()?;

    for n in 0..harness.warmup_runs {
        let outcome = run(config, &mut SilentReporter)?;
        debug!(run = n, elapsed = ?outcome.elapsed, "warm-up run finished");
    }

    let mut runs: Vec<RunOutcome> = Vec::with_capacity(harness.measured_runs);
    for n in 0..harness.measured_runs {
        let outcome = if n == 0 {
            run(config, reporter)?
        } else {
            run(config, &mut SilentReporter)?
        };
        debug!(run = n, total = outcome.total, elapsed = ?outcome.elapsed, "measured run finished");

        if let Some(first) = runs.first() {
            if first.total != outcome.total {
                return Err(BenchError::NonDeterministic {
                    expected: first.total,
                    actual: outcome.total,
                    run: n,
                });
            }
        }
        runs.push(outcome);
    }

    let timing = TimingStats::from_durations(runs.iter().map(|r| r.elapsed))
        .ok_or_else(|| config_err!("no measured runs"))?;
    info!(
        runs = runs.len(),
        mean_secs = timing.mean_secs,
        min_secs = timing.min_secs,
        max_secs = timing.max_secs,
        "benchmark timing"
    );

    Ok(HarnessOutcome {
        total: runs[0].total,
        runs,
        timing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::RecordingReporter;

    #[test]
    fn test_only_first_measured_run_reports() {
        let config = BenchmarkConfig::new(5, 2, 2);
        let harness = HarnessConfig {
            warmup_runs: 2,
            measured_runs: 3,
        };
        let mut recorder = RecordingReporter::new();

        let outcome = run_harness(&config, &harness, &mut recorder).unwrap();

        assert_eq!(outcome.total, 10);
        assert_eq!(outcome.runs.len(), 3);
        assert_eq!(recorder.events.len(), 3);
        assert_eq!(recorder.lines().len(), 4);
    }

    #[test]
    fn test_zero_measured_runs_rejected() {
        let harness = HarnessConfig {
            warmup_runs: 1,
            measured_runs: 0,
        };
        let result = run_harness(
            &BenchmarkConfig::new(5, 2, 2),
            &harness,
            &mut SilentReporter,
        );
        assert!(matches!(result, Err(BenchError::InvalidConfig(_))));
    }

    #[test]
    fn test_default_harness_matches_driver() {
        let harness = HarnessConfig::default();
        assert_eq!(harness.warmup_runs, 3);
        assert_eq!(harness.measured_runs, 10);
        assert_eq!(HarnessConfig::single().measured_runs, 1);
    }
}
