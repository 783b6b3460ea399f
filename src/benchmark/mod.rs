//! Benchmark loop, its configuration, and the progress output seam

pub mod config;
pub mod reporter;
pub mod runner;

pub use config::BenchmarkConfig;
pub use reporter::{
    ProgressEvent, ProgressReporter, RecordingReporter, SilentReporter, WriterReporter,
};
pub use runner::{run, RunOutcome};
