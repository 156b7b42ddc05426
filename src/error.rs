//! Error taxonomy for decoding, filtering and encoding.
//!
//! Every variant is fatal to a run: the pipeline stops at the boundary where
//! the condition is detected and the binary exits non-zero.
use std::io;

/// Errors produced while loading, filtering or saving an image.
#[derive(Debug, thiserror::Error)]
pub enum SobelError {
    /// Open/read/write failure on the underlying byte source or sink.
    #[error("I/O error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// Bad magic token or unparsable header integers.
    #[error("malformed PPM header: {0}")]
    Format(String),

    /// The header declares more pixel bytes than the stream holds.
    #[error("truncated pixel data: expected {expected} bytes, found {available}")]
    Truncated { expected: usize, available: usize },

    /// Invalid run configuration (thread count, argument count).
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SobelError {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SobelError>;
