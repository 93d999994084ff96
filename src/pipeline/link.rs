//! Badges, images and links.
//!
//! | Markdown | Trac |
//! |----------|------|
//! | `[![alt](img)](url)` | `[url [[Image(img, alt)]]]` |
//! | `![alt](img)` | `[[Image(img, alt)]]` |
//! | `[text](url)` | `[url text]` |
//!
//! Badges must match before images, otherwise the inner image is consumed
//! on its own and the outer link is left holding Trac syntax.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_BADGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[!\[([^\]\n]*?)\]\(([^)\n]*?)\)\]\(([^)\n]*?)\)").unwrap()
});
static RE_IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]\n]*?)\]\(([^)\n]*?)\)").unwrap());
static RE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]\n]*?)\]\(([^)\n]*?)\)").unwrap());

pub fn convert_links(input: &str) -> String {
    let s = RE_BADGE.replace_all(input, |caps: &Captures<'_>| {
        format!("[{} {}]", caps[3].trim(), image_macro(&caps[2], &caps[1]))
    });
    let s = RE_IMAGE.replace_all(&s, |caps: &Captures<'_>| image_macro(&caps[2], &caps[1]));
    let s = RE_LINK.replace_all(&s, |caps: &Captures<'_>| {
        let url = caps[2].trim();
        let text = caps[1].trim();
        if text.is_empty() {
            format!("[{url}]")
        } else {
            format!("[{url} {text}]")
        }
    });
    s.into_owned()
}

fn image_macro(src: &str, alt: &str) -> String {
    let (src, alt) = (src.trim(), alt.trim());
    if alt.is_empty() {
        format!("[[Image({src})]]")
    } else {
        format!("[[Image({src}, {alt})]]")
    }
}
