use crate::diagnostics::TimingBreakdown;
use serde::Serialize;
use std::path::PathBuf;

/// Dimensions of the decoded input image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Summary of one load → filter → save run, returned by
/// [`pipeline::run`](crate::pipeline::run).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub input: InputDescriptor,
    pub threads: usize,
    pub timings: TimingBreakdown,
}

impl RunReport {
    /// Wall time of the Sobel stage alone, in microseconds.
    pub fn filter_us(&self) -> u64 {
        self.timings.stage_us(super::STAGE_SOBEL).unwrap_or(0)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
