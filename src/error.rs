//! Error types for the md2trac library.
//!
//! The conversion pipeline itself never fails: every input, however
//! malformed, produces a best-effort Trac document by leaving constructs it
//! does not recognise untouched. The only fallible operations are the file
//! helpers in [`crate::convert`] and configuration validation, and both report
//! through [`Md2TracError`].

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the md2trac library.
#[derive(Debug, Error)]
pub enum Md2TracError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Input file '{path}' does not exist\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// Reading the input failed for any other reason.
    #[error("Error reading input file '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid UTF-8 text.
    #[error("Input file '{path}' is not valid UTF-8 (first invalid byte at offset {offset})")]
    InvalidEncoding { path: PathBuf, offset: usize },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create the directory that should hold the output file.
    #[error("Error creating output directory '{path}': {source}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not create or write the output wiki file.
    #[error("Error writing output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Md2TracError {
    /// Map an I/O error raised while reading `path` to the matching variant.
    pub(crate) fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Md2TracError::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => Md2TracError::PermissionDenied { path },
            _ => Md2TracError::ReadFailed { path, source },
        }
    }
}
