//! JSON summary of a harness invocation

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::benchmark::BenchmarkConfig;
use crate::common::error::BenchResult;
use crate::harness::stats::TimingStats;
use crate::harness::{HarnessConfig, HarnessOutcome};

/// Where and how the binary was built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub version: String,
    pub os: String,
    pub arch: String,
    pub allocator: String,
}

impl BuildInfo {
    pub fn current(allocator: &str) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            allocator: allocator.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub config: BenchmarkConfig,
    pub harness: HarnessConfig,
    pub total: i64,
    pub timing: TimingStats,
    pub build: BuildInfo,
}

impl BenchmarkReport {
    pub fn new(
        config: BenchmarkConfig,
        harness: HarnessConfig,
        outcome: &HarnessOutcome,
        build: BuildInfo,
    ) -> Self {
        Self {
            config,
            harness,
            total: outcome.total,
            timing: outcome.timing,
            build,
        }
    }

    pub fn to_json(&self) -> BenchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> BenchResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_from<P: AsRef<Path>>(path: P) -> BenchResult<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}
