//! Whole-document whitespace passes that bracket the pipeline.

use once_cell::sync::Lazy;
use regex::Regex;

// ── Stage 1: Normalise line endings ──────────────────────────────────────────

pub fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

// ── Stage 14: Collapse blank lines and trim ──────────────────────────────────

static RE_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

pub fn collapse_blank_lines(input: &str) -> String {
    RE_BLANK_LINES.replace_all(input, "\n\n").into_owned()
}

/// Drop leading blank lines and all trailing whitespace.
///
/// Indentation of the first non-blank line survives: in Trac a list item is
/// only a list item when it starts with a space.
pub fn trim_document(input: &str) -> String {
    let trimmed = input.trim_end();
    let first_content = match trimmed.find(|c: char| !c.is_whitespace()) {
        Some(i) => i,
        None => return String::new(),
    };
    let line_start = trimmed[..first_content]
        .rfind('\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    trimmed[line_start..].to_string()
}
