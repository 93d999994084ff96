//! Protected spans: hide a region behind an opaque token, restore it later.
//!
//! A pass whose rules must not fire inside some region (code bodies, inline
//! code) lifts that region out first, leaving a token in its place. After
//! the other passes have run, [`ProtectedSpans::restore`] substitutes every
//! token back with a rendering of the stored value.
//!
//! Tokens look like `U+E010 KIND index U+E011`. The delimiters come from the
//! Unicode private-use area, so Markdown text never contains them and no
//! rewrite rule matches them. `KIND` is plain ASCII letters; several span
//! sets can be in flight at once as long as their kinds differ.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::warn;

const OPEN: char = '\u{E010}';
const CLOSE: char = '\u{E011}';

static RE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x{E010}([A-Za-z]+)([0-9]+)\x{E011}").unwrap());

/// Ordered collection of hidden regions, in order of appearance.
#[derive(Debug, Clone)]
pub struct ProtectedSpans<T> {
    kind: &'static str,
    values: Vec<T>,
}

/// Result of [`ProtectedSpans::restore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restored {
    pub text: String,
    /// Tokens found and substituted.
    pub restored: usize,
    /// Tokens that no longer appeared in the text.
    pub missing: usize,
}

impl<T> ProtectedSpans<T> {
    pub fn new(kind: &'static str) -> Self {
        debug_assert!(kind.chars().all(|c| c.is_ascii_alphabetic()));
        Self {
            kind,
            values: Vec::new(),
        }
    }

    /// Store `value` and return the token that stands in for it.
    pub fn protect(&mut self, value: T) -> String {
        let token = token(self.kind, self.values.len());
        self.values.push(value);
        token
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn values(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    /// Replace each token in `text` (exactly once) with `render(value)`.
    ///
    /// One scan over `text`. Tokens of another kind, and repeats of a token
    /// already substituted, are left in place.
    pub fn restore(self, text: &str, render: impl Fn(&T) -> String) -> Restored {
        let mut resolved = vec![false; self.values.len()];
        let out = RE_TOKEN
            .replace_all(text, |caps: &Captures<'_>| {
                let slot = (&caps[1] == self.kind)
                    .then(|| caps[2].parse::<usize>().ok())
                    .flatten()
                    .filter(|&i| i < resolved.len() && !resolved[i]);
                match slot {
                    Some(i) => {
                        resolved[i] = true;
                        render(&self.values[i])
                    }
                    None => caps[0].to_string(),
                }
            })
            .into_owned();

        for (i, _) in resolved.iter().enumerate().filter(|(_, done)| !**done) {
            warn!(
                "{} placeholder {:?} vanished before restore",
                self.kind,
                token(self.kind, i)
            );
        }
        let restored = resolved.iter().filter(|done| **done).count();
        Restored {
            text: out,
            restored,
            missing: resolved.len() - restored,
        }
    }
}

fn token(kind: &str, index: usize) -> String {
    format!("{OPEN}{kind}{index}{CLOSE}")
}

/// True if `text` still holds a token from any span set.
pub fn contains_token(text: &str) -> bool {
    text.contains(OPEN) || text.contains(CLOSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique_and_ordered() {
        let mut spans = ProtectedSpans::new("CODE");
        let a = spans.protect("first");
        let b = spans.protect("second");
        assert_ne!(a, b);
        assert_eq!(spans.values().copied().collect::<Vec<_>>(), vec!["first", "second"]);
        let r = spans.restore(&format!("{b}{a}"), |v| v.to_string());
        assert_eq!(r.text, "secondfirst");
    }

    #[test]
    fn test_kinds_do_not_collide() {
        let mut code = ProtectedSpans::new("CODE");
        let mut inline = ProtectedSpans::new("INLINE");
        assert_ne!(code.protect(()), inline.protect(()));
    }

    #[test]
    fn test_restore_round_trip() {
        let mut spans = ProtectedSpans::new("CODE");
        let t0 = spans.protect("x".to_string());
        let t1 = spans.protect("y".to_string());
        let text = format!("a {t0} b {t1} c");
        let r = spans.restore(&text, |v| format!("<{v}>"));
        assert_eq!(r.text, "a <x> b <y> c");
        assert_eq!(r.restored, 2);
        assert_eq!(r.missing, 0);
        assert!(!contains_token(&r.text));
    }

    #[test]
    fn test_restore_reports_missing() {
        let mut spans = ProtectedSpans::new("CODE");
        let _ = spans.protect(1);
        let r = spans.restore("nothing here", |v| v.to_string());
        assert_eq!(r.restored, 0);
        assert_eq!(r.missing, 1);
        assert_eq!(r.text, "nothing here");
    }

    #[test]
    fn test_index_ten_does_not_match_index_one() {
        let mut spans = ProtectedSpans::new("CODE");
        let tokens: Vec<String> = (0..11).map(|i| spans.protect(i)).collect();
        let text = tokens.join(" ");
        let r = spans.restore(&text, |v| format!("[{v}]"));
        assert_eq!(r.text, "[0] [1] [2] [3] [4] [5] [6] [7] [8] [9] [10]");
    }

    #[test]
    fn test_other_kinds_left_in_place() {
        let mut code = ProtectedSpans::new("CODE");
        let mut inline = ProtectedSpans::new("INLINE");
        let c = code.protect("c");
        let i = inline.protect("i");
        let r = inline.restore(&format!("{c} {i}"), |v| v.to_string());
        assert_eq!(r.text, format!("{c} i"));
        assert_eq!(r.missing, 0);
    }

    #[test]
    fn test_repeated_token_restored_once() {
        let mut spans = ProtectedSpans::new("CODE");
        let t = spans.protect("x");
        let r = spans.restore(&format!("{t}{t}"), |v| v.to_string());
        assert_eq!(r.text, format!("x{t}"));
        assert_eq!(r.restored, 1);
    }

    #[test]
    fn test_many_spans_all_restored() {
        let mut spans = ProtectedSpans::new("INLINE");
        let text: String = (0..50_000).map(|i| spans.protect(i) + " ").collect();
        let r = spans.restore(&text, |v| v.to_string());
        assert_eq!(r.restored, 50_000);
        assert_eq!(r.missing, 0);
        assert!(r.text.starts_with("0 1 2 "));
        assert!(r.text.ends_with(" 49999 "));
        assert!(!contains_token(&r.text));
    }
}
