//! # md2trac
//!
//! Convert Markdown documents to Trac Wiki syntax.
//!
//! Headings, emphasis, lists, checkboxes, tables, fenced code, links, images,
//! badges, footnotes, quotes and rules keep their meaning; only the surface
//! syntax changes. There is no Markdown AST: the converter is an ordered
//! series of line-anchored rewrite passes over the whole document, with code
//! regions hidden behind placeholders while the passes that could mangle them
//! run.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown
//!  │
//!  ├─ 1. Normalise   line endings, hide backslash escapes
//!  ├─ 2. Protect     lift fenced code blocks out behind placeholders
//!  ├─ 3. Structure   tables, badges/images/links, headings
//!  ├─ 4. Restore     code blocks back as {{{ #!lang … }}}
//!  ├─ 5. Prose       emphasis, lists, quotes, rules, footnotes
//!  └─ 6. Cleanup     reveal escapes, collapse blank lines, trim
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! let wiki = md2trac::md_to_trac("# Title\n\n- [x] **done**");
//! assert_eq!(wiki, "= Title =\n\n * [X] '''done'''");
//! ```
//!
//! Re-running the converter on its own output is not a no-op: Trac syntax
//! such as `|| a ||` still looks like Markdown to some passes.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2trac` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, ListIndent};
pub use convert::{convert_file, convert_str, default_output_path, md_to_trac, read_markdown};
pub use error::Md2TracError;
pub use output::{ConversionOutput, ConversionStats, FileConversion};
