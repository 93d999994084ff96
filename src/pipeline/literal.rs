//! Apply a pass to prose only, skipping rendered `{{{ }}}` literal blocks.
//!
//! Code blocks are back in the document from stage 7 onwards, yet the inline,
//! list, quote, rule and footnote passes that follow must never touch them.
//! [`map_prose`] splits the text at multi-line literal blocks, hands each
//! prose segment to the pass, and copies literal blocks through verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_LITERAL_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{\{\{\n.*?\n\}\}\}").unwrap());

pub fn map_prose(input: &str, pass: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last = 0;
    for m in RE_LITERAL_BLOCK.find_iter(input) {
        out.push_str(&pass(&input[last..m.start()]));
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&pass(&input[last..]));
    out
}

/// Apply `rewrite` to every line, keeping line breaks exactly.
pub fn map_lines(input: &str, rewrite: impl Fn(&str) -> Option<String>) -> String {
    input
        .split('\n')
        .map(|line| rewrite(line).unwrap_or_else(|| line.to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}
