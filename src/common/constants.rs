//! Constants used throughout kobench

/// Number of iterations of the main loop
pub const ITERATIONS: u64 = 100_000_000;

/// Number of object slots in the working set
pub const ARRAY_SIZE: usize = 1000;

/// Number of data fields carried by every kernel object
pub const FIELD_COUNT: usize = 64;

/// A progress line is emitted every this many iterations
pub const PROGRESS_INTERVAL: u64 = 10_000_000;

/// Clears the sign bit, keeping values in the non-negative 63-bit range
pub const VALUE_MASK: i64 = 0x7FFF_FFFF_FFFF_FFFF;

/// Unmeasured runs executed before timing starts
pub const DEFAULT_WARMUP_RUNS: usize = 3;

/// Measured runs used by the comparison harness
pub const DEFAULT_MEASURED_RUNS: usize = 10;

/// Label printed in front of progress and completion lines
pub const OUTPUT_LABEL: &str = "Rust";
