//! The benchmark loop

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::benchmark::config::BenchmarkConfig;
use crate::benchmark::reporter::{ProgressEvent, ProgressReporter};
use crate::common::error::BenchResult;
use crate::workload::{fold_accumulator, KernelObject, SlotArray};

/// Result of one complete run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutcome {
    /// Final accumulator value
    pub total: i64,
    /// Number of progress lines emitted
    pub progress_lines: u64,
    /// Wall-clock time of the loop; never feeds into `total`
    pub elapsed: Duration,
}

/// Run the loop once with `config`, reporting through `reporter`.
///
/// For each iteration `i` a fresh object with id `i` is allocated, populated,
/// stored in slot `i % slot_count`, and its first field folded into the
/// accumulator.
pub fn run<R: ProgressReporter + ?Sized>(
    config: &BenchmarkConfig,
    reporter: &mut R,
) -> BenchResult<RunOutcome> {
    config.validate()?;

    let mut slots = SlotArray::new(config.slot_count)?;
    let mut total: i64 = 0;
    let mut progress_lines = 0u64;

    let start = Instant::now();
    for i in 0..config.iterations {
        let index = slots.index_for(i);
        let object = slots.store(index, KernelObject::boxed(i as i64));
        object.perform_work();
        total = fold_accumulator(total, object.get_data(0).unwrap_or_default());

        if i % config.progress_interval == 0 {
            reporter.progress(ProgressEvent {
                iteration: i,
                accumulator: total,
            })?;
            progress_lines += 1;
        }
    }
    let elapsed = start.elapsed();

    reporter.completed(total)?;

    Ok(RunOutcome {
        total,
        progress_lines,
        elapsed,
    })
}
