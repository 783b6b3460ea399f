//! Benchmark loop configuration

use serde::{Deserialize, Serialize};

use crate::common::constants::{ARRAY_SIZE, ITERATIONS, PROGRESS_INTERVAL};
use crate::common::error::BenchResult;
use crate::config_err;

/// Parameters of a single benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Number of loop iterations, numbered from 0
    pub iterations: u64,
    /// Number of object slots in the working set
    pub slot_count: usize,
    /// Emit a progress line whenever `i % progress_interval == 0`
    pub progress_interval: u64,
}

impl BenchmarkConfig {
    pub fn new(iterations: u64, slot_count: usize, progress_interval: u64) -> Self {
        Self {
            iterations,
            slot_count,
            progress_interval,
        }
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_slot_count(mut self, slot_count: usize) -> Self {
        self.slot_count = slot_count;
        self
    }

    pub fn with_progress_interval(mut self, progress_interval: u64) -> Self {
        self.progress_interval = progress_interval;
        self
    }

    /// Number of progress lines a run with this configuration emits
    pub fn expected_progress_lines(&self) -> u64 {
        if self.iterations == 0 || self.progress_interval == 0 {
            return 0;
        }
        (self.iterations - 1) / self.progress_interval + 1
    }

    pub fn validate(&self) -> BenchResult<()> {
        if self.slot_count == 0 {
            return Err(config_err!("slot count must be positive"));
        }
        if self.progress_interval == 0 {
            return Err(config_err!("progress interval must be positive"));
        }
        // Identifiers are i64; the last one is iterations - 1
        if self.iterations > i64::MAX as u64 {
            return Err(config_err!(
                "iteration count {} exceeds the identifier range",
                self.iterations
            ));
        }
        Ok(())
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new(ITERATIONS, ARRAY_SIZE, PROGRESS_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.iterations, 100_000_000);
        assert_eq!(config.slot_count, 1000);
        assert_eq!(config.progress_interval, 10_000_000);
        assert!(config.validate().is_ok());
        assert_eq!(config.expected_progress_lines(), 10);
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let config = BenchmarkConfig::default().with_slot_count(0);
        assert!(config.validate().is_err());

        let config = BenchmarkConfig::default().with_progress_interval(0);
        assert!(config.validate().is_err());

        let config = BenchmarkConfig::default().with_iterations(u64::MAX);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_expected_progress_lines() {
        assert_eq!(BenchmarkConfig::new(5, 2, 2).expected_progress_lines(), 3);
        assert_eq!(BenchmarkConfig::new(4, 2, 2).expected_progress_lines(), 2);
        assert_eq!(BenchmarkConfig::new(0, 2, 2).expected_progress_lines(), 0);
        assert_eq!(BenchmarkConfig::new(1, 2, 100).expected_progress_lines(), 1);
    }

    #[test]
    fn test_serde_roundtrip_field_names() {
        let json = serde_json::to_value(BenchmarkConfig::new(5, 2, 2)).unwrap();
        assert_eq!(json["iterations"], 5);
        assert_eq!(json["slot_count"], 2);
        assert_eq!(json["progress_interval"], 2);
    }
}
