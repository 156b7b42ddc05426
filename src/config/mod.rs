//! Run configuration derived from the command line.

pub mod run;

pub use run::{parse_thread_count, sobel_output_path, RunConfig, OUTPUT_SUFFIX};
