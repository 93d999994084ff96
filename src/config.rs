//! Configuration types for Markdown-to-Trac conversion.
//!
//! Conversion itself is a pure function of its input text and a
//! [`ConversionConfig`]. The config is immutable once built and holds no
//! per-call state, so one instance can be shared by any number of concurrent
//! conversions.

use crate::error::Md2TracError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for a Markdown-to-Trac conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use md2trac::{ConversionConfig, ListIndent};
///
/// let config = ConversionConfig::builder()
///     .language_alias("sh", "bash")
///     .list_indent(ListIndent::Normalize { unit: 4 })
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Extra fence-tag → Trac processor mappings. Default: empty.
    ///
    /// Consulted before the built-in table (`json` → `javascript`,
    /// `http` → `text`), so an entry here can also override a built-in.
    /// Tags without any mapping are passed through unchanged.
    pub language_aliases: BTreeMap<String, String>,

    /// How indentation of nested list items is rewritten. Default: [`ListIndent::Preserve`].
    pub list_indent: ListIndent,

    /// Extension given to derived output paths. Default: `"wiki"`.
    pub output_extension: String,

    /// Create missing parent directories of the output file. Default: true.
    pub create_dirs: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            language_aliases: BTreeMap::new(),
            list_indent: ListIndent::default(),
            output_extension: "wiki".to_string(),
            create_dirs: true,
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Trac processor name for a fence language tag, if one is configured
    /// or built in. Unknown tags return `None`; callers pass them through.
    pub fn language_directive(&self, tag: &str) -> Option<&str> {
        if let Some(alias) = self.language_aliases.get(tag) {
            return Some(alias.as_str());
        }
        match tag {
            "json" => Some("javascript"),
            "http" => Some("text"),
            _ => None,
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn language_alias(mut self, tag: impl Into<String>, processor: impl Into<String>) -> Self {
        self.config
            .language_aliases
            .insert(tag.into(), processor.into());
        self
    }

    pub fn list_indent(mut self, indent: ListIndent) -> Self {
        self.config.list_indent = indent;
        self
    }

    pub fn output_extension(mut self, ext: impl Into<String>) -> Self {
        let ext = ext.into();
        self.config.output_extension = ext.trim_start_matches('.').to_string();
        self
    }

    pub fn create_dirs(mut self, v: bool) -> Self {
        self.config.create_dirs = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Md2TracError> {
        let c = &self.config;
        if let ListIndent::Normalize { unit } = c.list_indent {
            if unit == 0 {
                return Err(Md2TracError::InvalidConfig(
                    "List indent unit must be ≥ 1".into(),
                ));
            }
        }
        if c.output_extension.is_empty() {
            return Err(Md2TracError::InvalidConfig(
                "Output extension must not be empty".into(),
            ));
        }
        for (tag, processor) in &c.language_aliases {
            if tag.trim().is_empty() || processor.trim().is_empty() {
                return Err(Md2TracError::InvalidConfig(format!(
                    "Language alias '{tag}={processor}' has an empty side"
                )));
            }
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Indentation policy for nested list items.
///
/// Trac decides list nesting purely by how far an item is indented relative
/// to its neighbours; top-level items always get a single leading space.
///
/// | Policy | `"    - b"` becomes |
/// |--------|---------------------|
/// | `Preserve` | `"    * b"` |
/// | `Normalize { unit: 4 }` | `"  * b"` (depth 1) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListIndent {
    /// Keep the source indentation exactly. (default)
    #[default]
    Preserve,
    /// Re-indent to two spaces per nesting level, where a level is `unit`
    /// source columns (a tab counts as one full unit). Partial units round up.
    Normalize { unit: usize },
}

impl ListIndent {
    /// Render the leading whitespace for a nested item whose source
    /// indentation is `indent` (never empty).
    pub fn render(&self, indent: &str) -> String {
        match *self {
            ListIndent::Preserve => indent.to_string(),
            ListIndent::Normalize { unit } => {
                let unit = unit.max(1);
                let width: usize = indent
                    .chars()
                    .map(|c| if c == '\t' { unit } else { 1 })
                    .sum();
                let depth = width.div_ceil(unit).max(1);
                " ".repeat(depth * 2)
            }
        }
    }
}
