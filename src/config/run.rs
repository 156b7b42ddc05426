use crate::error::{Result, SobelError};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Suffix that replaces the input extension in the output file name.
pub const OUTPUT_SUFFIX: &str = "_sobel.ppm";

/// Settings for one filter run, built from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub threads: NonZeroUsize,
}

impl RunConfig {
    /// Config for `input` with the derived output path.
    pub fn new(input: impl Into<PathBuf>, threads: NonZeroUsize) -> Self {
        let input = input.into();
        let output = sobel_output_path(&input);
        Self {
            input,
            output,
            threads,
        }
    }

    /// Parse `<input.ppm> [thread_count]` (program name already stripped).
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        match args.as_slice() {
            [input] => Ok(Self::new(input, NonZeroUsize::MIN)),
            [input, threads] => Ok(Self::new(input, parse_thread_count(threads)?)),
            _ => Err(SobelError::Config(format!(
                "expected 1 or 2 arguments, got {}",
                args.len()
            ))),
        }
    }
}

/// Parse a worker count; anything that is not a positive integer is rejected.
pub fn parse_thread_count(raw: &str) -> Result<NonZeroUsize> {
    let value: i64 = raw.trim().parse().map_err(|_| {
        SobelError::Config(format!("thread count {raw:?} is not an integer"))
    })?;
    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| SobelError::Config(format!("thread count must be positive, got {value}")))
}

/// Output path for `input`: the file name loses its last `.`-extension and
/// gains `_sobel.ppm`. Names without a `.` keep their full text.
pub fn sobel_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => name.as_str(),
    };
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_replaces_last_extension() {
        assert_eq!(
            sobel_output_path(Path::new("photo.ppm")),
            PathBuf::from("photo_sobel.ppm")
        );
        assert_eq!(
            sobel_output_path(Path::new("data/scan.v2.ppm")),
            PathBuf::from("data/scan.v2_sobel.ppm")
        );
    }

    #[test]
    fn output_path_without_extension_appends_suffix() {
        assert_eq!(
            sobel_output_path(Path::new("raw")),
            PathBuf::from("raw_sobel.ppm")
        );
        assert_eq!(
            sobel_output_path(Path::new("dir.d/raw")),
            PathBuf::from("dir.d/raw_sobel.ppm")
        );
    }

    #[test]
    fn thread_count_must_be_positive_integer() {
        assert_eq!(parse_thread_count("4").unwrap().get(), 4);
        for raw in ["0", "-3", "two", ""] {
            assert!(
                matches!(parse_thread_count(raw), Err(SobelError::Config(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn from_args_defaults_to_one_thread() {
        let cfg = RunConfig::from_args(["img.ppm"]).unwrap();
        assert_eq!(cfg.threads.get(), 1);
        assert_eq!(cfg.output, PathBuf::from("img_sobel.ppm"));

        let cfg = RunConfig::from_args(["img.ppm", "3"]).unwrap();
        assert_eq!(cfg.threads.get(), 3);
    }

    #[test]
    fn from_args_rejects_wrong_count() {
        let none: [&str; 0] = [];
        assert!(matches!(
            RunConfig::from_args(none),
            Err(SobelError::Config(_))
        ));
        assert!(matches!(
            RunConfig::from_args(["a.ppm", "2", "extra"]),
            Err(SobelError::Config(_))
        ));
        assert!(matches!(
            RunConfig::from_args(["a.ppm", "0"]),
            Err(SobelError::Config(_))
        ));
    }
}
