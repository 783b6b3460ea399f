//! kobench - Kernel-Object Allocation Benchmark
//!
//! Measures allocation and arithmetic throughput by allocating a fixed-size
//! object per iteration, populating it, and folding one field into a masked
//! 63-bit accumulator. Output is fully deterministic for a given
//! configuration.
//!
pub mod benchmark;
pub mod common;
pub mod harness;
pub mod workload;

// Re-export common types for convenience
pub use common::{BenchError, BenchResult};

// Re-export the benchmark loop for convenience
pub use benchmark::{
    run, BenchmarkConfig, ProgressEvent, ProgressReporter, RecordingReporter, RunOutcome,
    SilentReporter, WriterReporter,
};

// Re-export the harness for convenience
pub use harness::{run_harness, BenchmarkReport, BuildInfo, HarnessConfig, HarnessOutcome, TimingStats};

// Re-export the working set for convenience
pub use workload::{KernelObject, SlotArray};
