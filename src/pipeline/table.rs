//! Pipe tables → Trac `||` tables.
//!
//! A table is a maximal run of lines that begin and end with `|`. Inside a
//! run the GFM header-separator row is dropped and every other row is
//! re-emitted with trimmed cells:
//!
//! ```text
//! | A | B |            || A || B ||
//! |---|:-:|     ──▶    || 1 || 2 ||
//! | 1 | 2 |
//! ```

/// Convert every table block. Returns the text and the number of blocks.
pub fn convert_tables(input: &str) -> (String, usize) {
    let mut result: Vec<String> = Vec::new();
    let mut tables = 0usize;
    let mut in_table = false;

    for line in input.split('\n') {
        if is_table_row(line) {
            if !in_table {
                in_table = true;
                tables += 1;
            }
            if is_separator_row(line) {
                continue;
            }
            result.push(render_row(line));
        } else {
            in_table = false;
            result.push(line.to_string());
        }
    }

    (result.join("\n"), tables)
}

fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|') && trimmed.ends_with('|') && trimmed.len() > 2
}

/// A separator row contains only `|`, `-`, `:` and whitespace, with at
/// least one dash.
fn is_separator_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.contains('-')
        && trimmed
            .chars()
            .all(|c| c == '|' || c == '-' || c == ':' || c.is_whitespace())
}

fn split_cells(line: &str) -> Vec<&str> {
    let mut s = line.trim();
    if let Some(stripped) = s.strip_prefix('|') {
        s = stripped;
    }
    if let Some(stripped) = s.strip_suffix('|') {
        s = stripped;
    }
    s.split('|').map(str::trim).collect()
}

fn render_row(line: &str) -> String {
    format!("|| {} ||", split_cells(line).join(" || "))
}
