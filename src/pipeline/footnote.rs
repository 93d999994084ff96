//! Footnotes.
//!
//! A definition line `[^id]: text` becomes `[[FootNote(id,text)]]`; any
//! other `[^id]` is a reference and becomes the superscript `^id^`.
//! Definitions are rewritten first so their leading `[^id]` is not taken
//! for a reference.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_FOOTNOTE_DEF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\[\^([^\]\s]+)\]:[ \t]*(.+?)[ \t]*$").unwrap());
static RE_FOOTNOTE_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\^([^\]\s]+)\]").unwrap());

pub fn convert_footnotes(input: &str) -> String {
    let s = RE_FOOTNOTE_DEF.replace_all(input, "[[FootNote($1,$2)]]");
    RE_FOOTNOTE_REF.replace_all(&s, "^$1^").into_owned()
}
