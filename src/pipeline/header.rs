//! ATX headings → Trac headings: `## Title ##` becomes `== Title ==`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(#{1,6})[ \t]+(.+?)(?:[ \t]+#+)?[ \t]*$").unwrap()
});

pub fn convert_headers(input: &str) -> String {
    RE_HEADER
        .replace_all(input, |caps: &Captures<'_>| {
            let eq = "=".repeat(caps[1].len());
            format!("{eq} {} {eq}", caps[2].trim())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_levels() {
        for n in 1..=6 {
            let input = format!("{} Title", "#".repeat(n));
            let eq = "=".repeat(n);
            assert_eq!(convert_headers(&input), format!("{eq} Title {eq}"));
        }
    }

    #[test]
    fn test_closing_hashes_stripped() {
        assert_eq!(convert_headers("## Title ##  "), "== Title ==");
    }

    #[test]
    fn test_trailing_hash_in_word_kept() {
        assert_eq!(convert_headers("# C#"), "= C# =");
    }

    #[test]
    fn test_seven_hashes_not_a_header() {
        assert_eq!(convert_headers("####### x"), "####### x");
    }

    #[test]
    fn test_mid_line_hash_not_a_header() {
        assert_eq!(convert_headers("issue # 12"), "issue # 12");
    }

    #[test]
    fn test_hash_without_space_not_a_header() {
        assert_eq!(convert_headers("#hashtag"), "#hashtag");
    }

    #[test]
    fn test_multiple_lines() {
        assert_eq!(
            convert_headers("# Header 1\n## Header 2\n### Header 3"),
            "= Header 1 =\n== Header 2 ==\n=== Header 3 ==="
        );
    }
}
