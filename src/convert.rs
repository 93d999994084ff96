//! Conversion entry points.
//!
//! [`md_to_trac`] and [`convert_str`] are pure: text in, text out, no I/O.
//! [`convert_file`] wraps them with the file handling the `md2trac` binary
//! needs: existence check, read, output directory creation and an atomic
//! write.

use crate::config::ConversionConfig;
use crate::error::Md2TracError;
use crate::output::{count_lines, ConversionOutput, ConversionStats, FileConversion};
use crate::pipeline;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Convert Markdown text to Trac Wiki text with the default configuration.
///
/// # Example
/// ```rust
/// assert_eq!(md2trac::md_to_trac("## Usage"), "== Usage ==");
/// ```
pub fn md_to_trac(input: &str) -> String {
    pipeline::run(input, &ConversionConfig::default()).text
}

/// Convert Markdown text and collect statistics about the run.
pub fn convert_str(input: &str, config: &ConversionConfig) -> ConversionOutput {
    let start = Instant::now();
    let run = pipeline::run(input, config);
    let stats = ConversionStats {
        input_lines: count_lines(input),
        output_lines: count_lines(&run.text),
        code_blocks: run.code_blocks,
        tables: run.tables,
        duration_us: start.elapsed().as_micros() as u64,
    };
    debug!(
        "Converted {} lines into {} lines in {}µs",
        stats.input_lines, stats.output_lines, stats.duration_us
    );
    ConversionOutput {
        wiki: run.text,
        stats,
    }
}

/// The output path used when none is given: `input` with its extension
/// replaced by `extension` (`docs/api.md` → `docs/api.wiki`).
pub fn default_output_path(input: impl AsRef<Path>, extension: &str) -> PathBuf {
    input.as_ref().with_extension(extension)
}

/// Convert a Markdown file and write the result next to it, or to `output`.
///
/// The write is atomic: the text goes to a temporary file in the target
/// directory which is then persisted over the destination, so a failed run
/// never leaves a half-written wiki page behind.
///
/// # Errors
/// - [`Md2TracError::FileNotFound`] / [`Md2TracError::PermissionDenied`] /
///   [`Md2TracError::ReadFailed`] when the input cannot be read
/// - [`Md2TracError::InvalidEncoding`] when the input is not UTF-8
/// - [`Md2TracError::CreateDirFailed`] / [`Md2TracError::OutputWriteFailed`]
///   when the output cannot be written
pub fn convert_file(
    input: impl AsRef<Path>,
    output: Option<&Path>,
    config: &ConversionConfig,
) -> Result<FileConversion, Md2TracError> {
    let input = input.as_ref();
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input, &config.output_extension));

    if !input.exists() {
        return Err(Md2TracError::FileNotFound {
            path: input.to_path_buf(),
        });
    }

    info!("Converting '{}' to '{}'", input.display(), output.display());
    let markdown = read_markdown(input)?;
    let converted = convert_str(&markdown, config);

    write_atomic(&output, &converted.wiki, config.create_dirs)?;
    info!(
        "Wrote {} lines to '{}'",
        converted.stats.output_lines,
        output.display()
    );

    Ok(FileConversion {
        input: input.to_path_buf(),
        output,
        stats: converted.stats,
    })
}

/// Read a file as UTF-8 Markdown.
pub fn read_markdown(path: impl AsRef<Path>) -> Result<String, Md2TracError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| Md2TracError::from_read(path, e))?;
    String::from_utf8(bytes).map_err(|e| Md2TracError::InvalidEncoding {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })
}

// ── Internal helpers ─────────────────────────────────────────────────────

fn write_atomic(path: &Path, contents: &str, create_dirs: bool) -> Result<(), Md2TracError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    if create_dirs && !dir.exists() {
        debug!("Creating output directory '{}'", dir.display());
        std::fs::create_dir_all(&dir).map_err(|e| Md2TracError::CreateDirFailed {
            path: dir.clone(),
            source: e,
        })?;
    }

    let write_failed = |source: std::io::Error| Md2TracError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(write_failed)?;
    tmp.write_all(contents.as_bytes()).map_err(write_failed)?;
    tmp.persist(path).map_err(|e| write_failed(e.error))?;
    Ok(())
}
