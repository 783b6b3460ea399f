//! Timing statistics over measured runs

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingStats {
    pub runs: usize,
    pub mean_secs: f64,
    pub min_secs: f64,
    pub max_secs: f64,
}

impl TimingStats {
    /// Summarize `durations`; `None` when there are none
    pub fn from_durations<I>(durations: I) -> Option<Self>
    where
        I: IntoIterator<Item = Duration>,
    {
        let secs: Vec<f64> = durations.into_iter().map(|d| d.as_secs_f64()).collect();
        if secs.is_empty() {
            return None;
        }

        let sum: f64 = secs.iter().sum();
        let min = secs.iter().copied().fold(f64::INFINITY, f64::min);
        let max = secs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            runs: secs.len(),
            mean_secs: sum / secs.len() as f64,
            min_secs: min,
            max_secs: max,
        })
    }
}
