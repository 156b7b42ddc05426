use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Timing entry describing a single stage of a run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_us: u64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_us: u64) -> Self {
        Self {
            label: label.into(),
            elapsed_us,
        }
    }
}

/// Aggregated timing trace for one run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_us: u64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_us: u64) {
        self.total_us += elapsed_us;
        self.stages.push(StageTiming::new(label, elapsed_us));
    }

    /// Run `f`, record its wall time under `label`, and return its output.
    pub fn measure<T>(&mut self, label: impl Into<String>, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.push(label, elapsed_us(start));
        out
    }

    pub fn stage_us(&self, label: &str) -> Option<u64> {
        self.stages
            .iter()
            .find(|stage| stage.label == label)
            .map(|stage| stage.elapsed_us)
    }
}

/// Microseconds elapsed since `start`, saturating at `u64::MAX`.
pub fn elapsed_us(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}
