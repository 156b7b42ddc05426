//! One-shot run: decode the input, apply the Sobel filter, encode the result.
//!
//! Each stage hands its image to the next by value and any error aborts the
//! run before the next stage starts. Nothing is written when decoding fails.
use crate::config::RunConfig;
use crate::diagnostics::{
    InputDescriptor, RunReport, TimingBreakdown, STAGE_DECODE, STAGE_ENCODE, STAGE_SOBEL,
};
use crate::edges::sobel_magnitude;
use crate::error::Result;
use crate::image::io::{load_ppm, save_ppm};
use log::{debug, info};

/// Execute `config` end to end and report what happened.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    run_with(config, |_| {})
}

/// Like [`run`], calling `on_loaded` as soon as the input is decoded, before
/// filtering or saving can fail.
pub fn run_with(
    config: &RunConfig,
    on_loaded: impl FnOnce(&InputDescriptor),
) -> Result<RunReport> {
    let mut timings = TimingBreakdown::default();

    let image = timings.measure(STAGE_DECODE, || load_ppm(&config.input))?;
    let input = InputDescriptor {
        width: image.w,
        height: image.h,
    };
    debug!(
        "pipeline: loaded {} ({}x{})",
        config.input.display(),
        input.width,
        input.height
    );
    on_loaded(&input);

    let filtered = timings.measure(STAGE_SOBEL, || sobel_magnitude(&image, config.threads));
    drop(image);

    timings.measure(STAGE_ENCODE, || save_ppm(&filtered, &config.output))?;

    let report = RunReport {
        input_path: config.input.clone(),
        output_path: config.output.clone(),
        input,
        threads: config.threads.get(),
        timings,
    };
    info!(
        "pipeline: {}x{} filtered with {} thread(s) in {} us, saved to {}",
        input.width,
        input.height,
        report.threads,
        report.filter_us(),
        config.output.display()
    );
    Ok(report)
}
