//! Fenced code blocks → Trac `{{{ }}}` literal blocks.
//!
//! Blocks are lifted out before any structural rule runs (stage 3) and put
//! back, rendered, once the structural rules are done (stage 7):
//!
//! ````text
//! ```json            {{{
//! {"a": 1}     ──▶   #!javascript
//! ```                {"a": 1}
//!                    }}}
//! ````
//!
//! Only the first word of the info string names the language; the rest of
//! the opening line (` ```python title="x" `) is dropped. An unterminated
//! fence never matches and stays in the text as-is.

use super::escape;
use super::protect::{ProtectedSpans, Restored};
use crate::config::ConversionConfig;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A lifted fenced block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Tag after the opening fence, if any.
    pub language: Option<String>,
    /// Raw body, without the newline before the closing fence.
    pub body: String,
}

static RE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```[ \t]*([A-Za-z0-9_+#.-]*)[^\n]*\n(.*?)\n?```").unwrap());

/// Replace every fenced block with a placeholder token.
pub fn extract(input: &str) -> (String, ProtectedSpans<CodeBlock>) {
    let mut spans = ProtectedSpans::new("CODE");
    let text = RE_FENCE
        .replace_all(input, |caps: &Captures<'_>| {
            let language = Some(&caps[1])
                .filter(|tag| !tag.is_empty())
                .map(str::to_string);
            spans.protect(CodeBlock {
                language,
                body: caps[2].to_string(),
            })
        })
        .into_owned();
    (text, spans)
}

/// Substitute each placeholder with its Trac rendering.
pub fn restore(
    input: &str,
    spans: ProtectedSpans<CodeBlock>,
    config: &ConversionConfig,
) -> Restored {
    spans.restore(input, |block| render(block, config))
}

/// Render one block in Trac syntax.
///
/// Known tags map through [`ConversionConfig::language_directive`]; other
/// tags become the processor name unchanged; no tag, no `#!` line.
pub fn render(block: &CodeBlock, config: &ConversionConfig) -> String {
    let mut out = String::from("{{{\n");
    if let Some(ref lang) = block.language {
        let directive = config.language_directive(lang).unwrap_or(lang.as_str());
        out.push_str("#!");
        out.push_str(directive);
        out.push('\n');
    }
    out.push_str(&escape::reveal_verbatim(&block.body));
    out.push_str("\n}}}");
    out
}
