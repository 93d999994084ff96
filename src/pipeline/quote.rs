//! Blockquotes → indented paragraphs.
//!
//! `> text` becomes ` text`; `> > text` and `>> text` become `  text`.
//! Double markers are recognised before single ones, so the second `>` is
//! never left behind as quoted text. The second `>` only counts as a marker
//! when whitespace or the end of the line follows it: `> >= 5` is a single
//! quote of `>= 5`.

use super::literal::map_lines;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_QUOTE_DOUBLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^>[ \t]*>(?:[ \t](.*))?$").unwrap());
static RE_QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^>[ \t]?(.*)$").unwrap());

pub fn convert_quotes(input: &str) -> String {
    map_lines(input, |line| {
        if let Some(caps) = RE_QUOTE_DOUBLE.captures(line) {
            let text = caps.get(1).map_or("", |m| m.as_str());
            return Some(format!("  {text}"));
        }
        RE_QUOTE
            .captures(line)
            .map(|caps| format!(" {}", &caps[1]))
    })
}
