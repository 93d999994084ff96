//! List items, one line at a time.
//!
//! Each line is classified once, first match wins, so a checkbox item is
//! never rewritten a second time as a plain bullet:
//!
//! | Markdown | Trac |
//! |----------|------|
//! | `- [x] done` | ` * [X] done` |
//! | `- [ ] todo` | ` * [ ] todo` |
//! | `- item` / `* item` | ` * item` |
//! | `3. item` | ` 1. item` |
//! | `  - nested` | `  * nested` |
//! | `    2. nested` | `    1. nested` |
//!
//! Top-level items get the single leading space Trac needs. Nested items
//! keep (or normalise, see [`ListIndent`]) their source indentation.

use super::literal::map_lines;
use crate::config::ListIndent;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_CHECKBOX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([ \t]*)[-*][ \t]+\[([x ])\][ \t]+(.+)$").unwrap());
static RE_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([ \t]*)[-*][ \t]+(.+)$").unwrap());
static RE_NUMBERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([ \t]*)\d+\.[ \t]+(.+)$").unwrap());

pub fn convert_lists(input: &str, indent: ListIndent) -> String {
    map_lines(input, |line| convert_line(line, indent))
}

fn convert_line(line: &str, indent: ListIndent) -> Option<String> {
    if let Some(caps) = RE_CHECKBOX.captures(line) {
        let state = if &caps[2] == "x" { "[X]" } else { "[ ]" };
        return Some(format!("{}* {state} {}", lead(&caps[1], indent), &caps[3]));
    }
    if let Some(caps) = RE_BULLET.captures(line) {
        return Some(format!("{}* {}", lead(&caps[1], indent), &caps[2]));
    }
    if let Some(caps) = RE_NUMBERED.captures(line) {
        return Some(format!("{}1. {}", lead(&caps[1], indent), &caps[2]));
    }
    None
}

fn lead(source: &str, indent: ListIndent) -> String {
    if source.is_empty() {
        " ".to_string()
    } else {
        indent.render(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(input: &str) -> String {
        convert_lists(input, ListIndent::Preserve)
    }

    #[test]
    fn test_unordered() {
        assert_eq!(
            convert("- Item 1\n- Item 2\n* Item 3"),
            " * Item 1\n * Item 2\n * Item 3"
        );
    }

    #[test]
    fn test_ordered() {
        assert_eq!(
            convert("1. Item 1\n2. Item 2\n10. Item 3"),
            " 1. Item 1\n 1. Item 2\n 1. Item 3"
        );
    }

    #[test]
    fn test_nested_preserved() {
        assert_eq!(
            convert("  - Nested 1\n    - Nested 2\n   3. Odd"),
            "  * Nested 1\n    * Nested 2\n   1. Odd"
        );
    }

    #[test]
    fn test_nested_normalised() {
        let out = convert_lists("    - a\n        - b", ListIndent::Normalize { unit: 4 });
        assert_eq!(out, "  * a\n    * b");
    }

    #[test]
    fn test_checkboxes() {
        assert_eq!(
            convert("- [x] Checked\n- [ ] Unchecked"),
            " * [X] Checked\n * [ ] Unchecked"
        );
    }

    #[test]
    fn test_nested_checkbox_keeps_indent() {
        assert_eq!(convert("  * [x] sub"), "  * [X] sub");
    }

    #[test]
    fn test_uppercase_x_is_plain_bullet() {
        assert_eq!(convert("- [X] item"), " * [X] item");
    }

    #[test]
    fn test_non_items_untouched() {
        let input = "plain\n-no space\n---\n1.5 apples\n";
        assert_eq!(convert(input), input);
    }
}
