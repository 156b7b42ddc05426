//! Run diagnostics: per-stage timings and the serializable run report.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, RunReport};
pub use timing::{elapsed_us, StageTiming, TimingBreakdown};

/// Stage labels recorded by the pipeline.
pub const STAGE_DECODE: &str = "decode";
pub const STAGE_SOBEL: &str = "sobel";
pub const STAGE_ENCODE: &str = "encode";
