//! Result types returned by the conversion entry points.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A converted document together with statistics about the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// The Trac Wiki text. Never ends in whitespace.
    pub wiki: String,
    pub stats: ConversionStats,
}

/// Counters collected while converting one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Lines in the source text (newline count + 1).
    pub input_lines: usize,
    /// Lines in the converted text (newline count + 1).
    pub output_lines: usize,
    /// Fenced code blocks turned into `{{{ }}}` literal blocks.
    pub code_blocks: usize,
    /// Pipe tables turned into `||` tables.
    pub tables: usize,
    /// Wall-clock time spent in the pipeline, in microseconds.
    pub duration_us: u64,
}

/// Outcome of [`crate::convert_file`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: ConversionStats,
}

/// Number of lines in `text`: newlines plus one, so empty text is one line.
pub(crate) fn count_lines(text: &str) -> usize {
    text.matches('\n').count() + 1
}
