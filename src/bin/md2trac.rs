//! CLI binary for md2trac.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ConversionConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use md2trac::{
    convert_file, convert_str, default_output_path, read_markdown, ConversionConfig, ListIndent,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert README.md to README.wiki
  md2trac README.md

  # Choose the output file (directories are created as needed)
  md2trac docs/api.md wiki/Api.wiki

  # Print the converted text instead of writing a file
  md2trac --stdout notes.md

  # Map extra fence languages to Trac processors
  md2trac --lang sh=bash --lang yml=yaml setup.md

  # Re-indent nested lists written with 4-space indentation
  md2trac --list-indent 4 outline.md

CONVERSIONS:
  Markdown                      Trac
  ────────────────────────────  ──────────────────────────────
  # Title / ## Title            = Title = / == Title ==
  **bold** *italic* ***both***  '''bold''' ''italic'' '''''both'''''
  - item / 1. item / - [x] done  * item /  1. item /  * [X] done
  | a | b |                     || a || b ||
  ```json … ```                 {{{ #!javascript … }}}
  [text](url) ![alt](img)       [url text] [[Image(img, alt)]]
  [^1] / [^1]: note             ^1^ / [[FootNote(1,note)]]

ENVIRONMENT VARIABLES:
  RUST_LOG                Override the log filter (e.g. md2trac=debug)
"#;

/// Convert Markdown files to Trac Wiki syntax.
#[derive(Parser, Debug)]
#[command(
    name = "md2trac",
    version,
    about = "Convert Markdown files to Trac Wiki syntax",
    long_about = "Convert a Markdown document (headings, emphasis, lists, checkboxes, tables, \
fenced code, links, images, badges, footnotes, quotes and rules) to Trac Wiki syntax. \
If OUTPUT is not given, it is the input filename with a .wiki extension.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Markdown file to convert.
    input: PathBuf,

    /// Output file. Default: INPUT with its extension replaced by --ext.
    output: Option<PathBuf>,

    /// Print the converted text to stdout instead of writing a file.
    #[arg(long, env = "MD2TRAC_STDOUT", conflicts_with = "output")]
    stdout: bool,

    /// Print a JSON report (paths and statistics) instead of progress lines.
    #[arg(long, env = "MD2TRAC_JSON")]
    json: bool,

    /// Extension for the derived output file.
    #[arg(long, env = "MD2TRAC_EXT", default_value = "wiki")]
    ext: String,

    /// Map a fence language to a Trac processor, e.g. sh=bash (repeatable).
    #[arg(long = "lang", value_name = "TAG=PROCESSOR", value_parser = parse_alias)]
    lang: Vec<(String, String)>,

    /// Nested list indentation: "preserve", or the source indent unit (e.g. 2, 4).
    #[arg(long, env = "MD2TRAC_LIST_INDENT", default_value = "preserve",
          value_parser = parse_list_indent)]
    list_indent: ListIndent,

    /// Fail instead of creating a missing output directory.
    #[arg(long, env = "MD2TRAC_NO_CREATE_DIRS")]
    no_create_dirs: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "MD2TRAC_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "MD2TRAC_QUIET", conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli)?;

    // ── Stdout mode ──────────────────────────────────────────────────────
    if cli.stdout {
        let markdown = read_markdown(&cli.input)
            .with_context(|| format!("Failed to read '{}'", cli.input.display()))?;
        let output = convert_str(&markdown, &config);

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if cli.json {
            let json =
                serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
            writeln!(handle, "{json}").context("Failed to write to stdout")?;
        } else {
            handle
                .write_all(output.wiki.as_bytes())
                .context("Failed to write to stdout")?;
            handle
                .write_all(b"\n")
                .context("Failed to write to stdout")?;
        }
        return Ok(());
    }

    // ── File mode ────────────────────────────────────────────────────────
    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input, &config.output_extension));

    let show_progress = !cli.quiet && !cli.json;
    if show_progress {
        println!(
            "Converting '{}' to '{}'...",
            cli.input.display(),
            output_path.display()
        );
    }

    let result = convert_file(&cli.input, Some(output_path.as_path()), &config)
        .context("Conversion failed")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialise report")?
        );
    } else if show_progress {
        println!("{}", green("Conversion completed successfully!"));
        println!(
            "Input: {} lines, Output: {} lines  {}",
            bold(&result.stats.input_lines.to_string()),
            bold(&result.stats.output_lines.to_string()),
            dim(&format!(
                "({} code blocks, {} tables)",
                result.stats.code_blocks, result.stats.tables
            )),
        );
    }

    Ok(())
}

/// Map CLI args to `ConversionConfig`.
fn build_config(cli: &Cli) -> Result<ConversionConfig> {
    let mut builder = ConversionConfig::builder()
        .output_extension(cli.ext.clone())
        .list_indent(cli.list_indent)
        .create_dirs(!cli.no_create_dirs);

    for (tag, processor) in &cli.lang {
        builder = builder.language_alias(tag.clone(), processor.clone());
    }

    builder.build().context("Invalid configuration")
}

/// Parse `--lang TAG=PROCESSOR`.
fn parse_alias(s: &str) -> Result<(String, String)> {
    let (tag, processor) = s
        .split_once('=')
        .with_context(|| format!("Expected TAG=PROCESSOR, got '{s}'"))?;
    let (tag, processor) = (tag.trim(), processor.trim());
    if tag.is_empty() || processor.is_empty() {
        anyhow::bail!("Expected TAG=PROCESSOR, got '{s}'");
    }
    Ok((tag.to_string(), processor.to_string()))
}

/// Parse `--list-indent` into `ListIndent`.
fn parse_list_indent(s: &str) -> Result<ListIndent> {
    let s = s.trim().to_lowercase();
    if s == "preserve" {
        return Ok(ListIndent::Preserve);
    }
    let unit: usize = s
        .parse()
        .with_context(|| format!("Invalid list indent '{s}': use 'preserve' or a number"))?;
    if unit == 0 {
        anyhow::bail!("List indent unit must be ≥ 1");
    }
    Ok(ListIndent::Normalize { unit })
}
