//! Rewrite passes for Markdown-to-Trac conversion.
//!
//! Each submodule implements one transformation step over the whole document
//! text. [`run`] drives them in a fixed order; that order is load-bearing.
//!
//! ## Data Flow
//!
//! ```text
//!  1 cleanup   CRLF / CR → LF
//!  2 escape    \* \_ \~ → sentinels
//!  3 code      ```lang … ``` → placeholder          ┐
//!  4 table     | a | b | → || a || b ||             │ code hidden
//!  5 link      badge, image, link                   │
//!  6 header    ## x → == x ==                       ┘
//!  7 code      placeholder → {{{ #!lang … }}}
//!  8 inline    ~~ *** ** * `                        ┐
//!  9 list      checkbox, bullet, number             │ prose only
//! 10 quote     > / >>                               │ (literal blocks
//! 11 rule      --- / ***                            │  skipped)
//! 12 footnote  [^id]: / [^id]                       ┘
//! 13 escape    sentinels → bare characters
//! 14 cleanup   collapse blank lines, trim
//! ```
//!
//! No pass keeps state between calls; everything per-run lives in locals of
//! [`run`], so conversions can run concurrently on independent inputs.

pub mod cleanup;
pub mod code;
pub mod escape;
pub mod footnote;
pub mod header;
pub mod inline;
pub mod link;
pub mod list;
pub mod literal;
pub mod protect;
pub mod quote;
pub mod rule;
pub mod table;

use crate::config::ConversionConfig;
use tracing::{debug, warn};

/// Text and counters produced by one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRun {
    pub text: String,
    pub code_blocks: usize,
    pub tables: usize,
}

/// Convert one Markdown document to Trac Wiki text.
pub fn run(input: &str, config: &ConversionConfig) -> PipelineRun {
    let s = cleanup::normalise_line_endings(input);
    let s = escape::protect(&s);

    let (s, blocks) = code::extract(&s);
    let code_blocks = blocks.len();
    debug!("Extracted {} fenced code blocks", code_blocks);

    let (s, tables) = table::convert_tables(&s);
    debug!("Converted {} tables", tables);
    let s = link::convert_links(&s);
    let s = header::convert_headers(&s);

    let restored = code::restore(&s, blocks, config);
    debug!("Restored {} code blocks", restored.restored);
    if restored.missing > 0 {
        warn!(
            "{} of {} code blocks could not be restored",
            restored.missing, code_blocks
        );
    }
    let s = restored.text;

    let s = literal::map_prose(&s, |prose| {
        let p = inline::convert_inline(prose);
        let p = list::convert_lists(&p, config.list_indent);
        let p = quote::convert_quotes(&p);
        let p = rule::convert_rules(&p);
        footnote::convert_footnotes(&p)
    });

    let s = escape::reveal(&s);
    let s = cleanup::collapse_blank_lines(&s);
    let text = cleanup::trim_document(&s);

    PipelineRun {
        text,
        code_blocks,
        tables,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(input: &str) -> String {
        run(input, &ConversionConfig::default()).text
    }

    #[test]
    fn test_code_content_not_reformatted() {
        let input = "```python\n# comment\n- not a list\n**not bold**\n> not a quote\n---\n```";
        assert_eq!(
            convert(input),
            "{{{\n#!python\n# comment\n- not a list\n**not bold**\n> not a quote\n---\n}}}"
        );
    }

    #[test]
    fn test_no_placeholder_left() {
        let input = "```\na\n```\ntext\n```rust\nb\n```\n```\nunterminated";
        let out = convert(input);
        assert!(!protect::contains_token(&out));
        assert_eq!(out.matches("{{{").count(), 2);
    }

    #[test]
    fn test_counts() {
        let r = run(
            "| a |\n\n```\nx\n```\n\n| b |",
            &ConversionConfig::default(),
        );
        assert_eq!(r.code_blocks, 1);
        assert_eq!(r.tables, 2);
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(convert("# Title\r\n\r\n- item\r\n"), "= Title =\n\n * item");
    }

    #[test]
    fn test_escapes_survive_formatting() {
        assert_eq!(convert(r"\*literal\* and \_x\_"), "*literal* and _x_");
    }

    #[test]
    fn test_blockquote_with_bold() {
        assert_eq!(
            convert("> **Important:** Always use HTTPS."),
            " '''Important:''' Always use HTTPS."
        );
    }

    #[test]
    fn test_rule_after_text() {
        assert_eq!(convert("a\n\n***\n\nb"), "a\n\n----\n\nb");
    }
}
