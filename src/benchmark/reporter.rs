//! Progress output
//!
//! The loop reports through [`ProgressReporter`] so the binary can print to
//! stdout while tests and warm-up runs record or discard the same events.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::common::constants::OUTPUT_LABEL;
use crate::common::error::BenchResult;

/// One progress line: the iteration index and the accumulator after it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub iteration: u64,
    pub accumulator: i64,
}

/// Sink for the benchmark's two kinds of output text
pub trait ProgressReporter {
    fn progress(&mut self, event: ProgressEvent) -> BenchResult<()>;

    fn completed(&mut self, total: i64) -> BenchResult<()>;
}

/// Format a progress line
pub fn progress_line(event: &ProgressEvent) -> String {
    format!(
        "{} Intermediate {}: {}",
        OUTPUT_LABEL, event.iteration, event.accumulator
    )
}

/// Format the final summary line
pub fn completed_line(total: i64) -> String {
    format!("{} version completed, total: {}", OUTPUT_LABEL, total)
}

/// Writes lines to any `Write`, typically locked stdout
pub struct WriterReporter<W: Write> {
    writer: W,
}

impl<W: Write> WriterReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ProgressReporter for WriterReporter<W> {
    fn progress(&mut self, event: ProgressEvent) -> BenchResult<()> {
        writeln!(self.writer, "{}", progress_line(&event))?;
        Ok(())
    }

    fn completed(&mut self, total: i64) -> BenchResult<()> {
        writeln!(self.writer, "{}", completed_line(total))?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every event in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    pub events: Vec<ProgressEvent>,
    pub total: Option<i64>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines a `WriterReporter` would have printed
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.events.iter().map(progress_line).collect();
        if let Some(total) = self.total {
            lines.push(completed_line(total));
        }
        lines
    }
}

impl ProgressReporter for RecordingReporter {
    fn progress(&mut self, event: ProgressEvent) -> BenchResult<()> {
        self.events.push(event);
        Ok(())
    }

    fn completed(&mut self, total: i64) -> BenchResult<()> {
        self.total = Some(total);
        Ok(())
    }
}

/// Discards everything; used for warm-up and repeated runs
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn progress(&mut self, _event: ProgressEvent) -> BenchResult<()> {
        Ok(())
    }

    fn completed(&mut self, _total: i64) -> BenchResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_formats() {
        let event = ProgressEvent {
            iteration: 10_000_000,
            accumulator: 50_000_005_000_000,
        };
        assert_eq!(
            progress_line(&event),
            "Rust Intermediate 10000000: 50000005000000"
        );
        assert_eq!(completed_line(10), "Rust version completed, total: 10");
    }

    #[test]
    fn test_writer_reporter_output() {
        let mut reporter = WriterReporter::new(Vec::new());
        reporter
            .progress(ProgressEvent {
                iteration: 0,
                accumulator: 0,
            })
            .unwrap();
        reporter.completed(10).unwrap();

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            text,
            "Rust Intermediate 0: 0\nRust version completed, total: 10\n"
        );
    }

    #[test]
    fn test_recording_reporter_lines_match_writer() {
        let mut recorder = RecordingReporter::new();
        recorder
            .progress(ProgressEvent {
                iteration: 2,
                accumulator: 3,
            })
            .unwrap();
        recorder.completed(10).unwrap();
        assert_eq!(
            recorder.lines(),
            vec![
                "Rust Intermediate 2: 3".to_string(),
                "Rust version completed, total: 10".to_string()
            ]
        );
    }
}
