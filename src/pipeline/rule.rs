//! Horizontal rules: `---`, `*****` and the like become Trac's `----`.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:-{3,}|\*{3,})[ \t]*$").unwrap());

pub fn convert_rules(input: &str) -> String {
    RE_RULE.replace_all(input, "----").into_owned()
}
