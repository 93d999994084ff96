//! Inline formatting: strikethrough, emphasis and code spans.
//!
//! Precedence (first wins on overlapping markers):
//!
//! | Markdown | Trac |
//! |----------|------|
//! | `~~text~~` | `~~text~~` |
//! | `***text***`, `___text___` | `'''''text'''''` |
//! | `**text**`, `__text__` | `'''text'''` |
//! | `*text*`, `_text_` | `''text''` |
//! | `` `text` `` | `` `text` `` |
//! | ``` ``te`xt`` ``` | `{{{te`xt}}}` |
//!
//! Code spans are hidden while the emphasis rules run, so `` `a*b*c` ``
//! keeps its stars. They are back in the text for the later line passes.
//! Emphasis markers must hug their text (`* not emphasis *`), and underscore
//! markers must sit on a word boundary so `snake_case_names` are left alone.
//! Unbalanced markers pass through.

use super::protect::ProtectedSpans;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

#[derive(Debug, Clone, PartialEq, Eq)]
enum CodeSpan {
    /// Content without backticks; Trac reads backticks as monospace too.
    Backtick(String),
    /// Content that itself holds a backtick.
    Braced(String),
}

static RE_CODE_DOUBLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"``(.+?)``").unwrap());
static RE_CODE_SINGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

static RE_STRIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~([^~\n]+?)~~").unwrap());

static RE_BOLD_ITALIC_STAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*\*([^*\s](?:[^\n]*?[^*\s])?)\*\*\*").unwrap());
static RE_BOLD_ITALIC_UNDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b___([^_\s](?:[^\n]*?[^_\s])?)___\b").unwrap());

static RE_BOLD_STAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*\s](?:[^\n]*?[^*\s])?)\*\*").unwrap());
static RE_BOLD_UNDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b__([^_\s](?:[^\n]*?[^_\s])?)__\b").unwrap());

static RE_ITALIC_STAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*\s](?:[^*\n]*[^*\s])?)\*").unwrap());
static RE_ITALIC_UNDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b_([^_\s](?:[^_\n]*[^_\s])?)_\b").unwrap());

pub fn convert_inline(input: &str) -> String {
    let mut spans = ProtectedSpans::new("INLINE");
    let s = RE_CODE_DOUBLE
        .replace_all(input, |caps: &Captures<'_>| {
            spans.protect(CodeSpan::Braced(caps[1].trim().to_string()))
        })
        .into_owned();
    let s = RE_CODE_SINGLE
        .replace_all(&s, |caps: &Captures<'_>| {
            spans.protect(CodeSpan::Backtick(caps[1].to_string()))
        })
        .into_owned();

    let s = RE_STRIKE.replace_all(&s, |caps: &Captures<'_>| format!("~~{}~~", caps[1].trim()));
    let s = RE_BOLD_ITALIC_STAR.replace_all(&s, "'''''$1'''''");
    let s = RE_BOLD_ITALIC_UNDER.replace_all(&s, "'''''$1'''''");
    let s = RE_BOLD_STAR.replace_all(&s, "'''$1'''");
    let s = RE_BOLD_UNDER.replace_all(&s, "'''$1'''");
    let s = RE_ITALIC_STAR.replace_all(&s, "''$1''");
    let s = RE_ITALIC_UNDER.replace_all(&s, "''$1''");

    spans
        .restore(&s, |span| match span {
            CodeSpan::Backtick(code) => format!("`{code}`"),
            CodeSpan::Braced(code) => format!("{{{{{{{code}}}}}}}"),
        })
        .text
}
