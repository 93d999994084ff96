//! Backslash escapes: `\*`, `\_` and `\~` stand for the bare character.
//!
//! [`protect`] swaps each escape for a private-use sentinel so emphasis and
//! list rules cannot see it; [`reveal`] turns the sentinel into the bare
//! character at the very end. Literal code bodies use [`reveal_verbatim`]
//! instead, which puts the backslash back so code keeps its source text.

const ESCAPES: [(char, char); 3] = [
    ('*', '\u{E000}'),
    ('_', '\u{E001}'),
    ('~', '\u{E002}'),
];

pub fn protect(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if let Some(&(_, sentinel)) = ESCAPES.iter().find(|(lit, _)| *lit == next) {
                    out.push(sentinel);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

pub fn reveal(input: &str) -> String {
    input
        .chars()
        .map(|c| match ESCAPES.iter().find(|(_, s)| *s == c) {
            Some(&(lit, _)) => lit,
            None => c,
        })
        .collect()
}

pub fn reveal_verbatim(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match ESCAPES.iter().find(|(_, s)| *s == c) {
            Some(&(lit, _)) => {
                out.push('\\');
                out.push(lit);
            }
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protect_hides_markers() {
        let p = protect(r"\*a\* \_b\_ \~c\~");
        assert!(!p.contains('*'));
        assert!(!p.contains('_'));
        assert!(!p.contains('~'));
        assert!(!p.contains('\\'));
    }

    #[test]
    fn test_reveal_consumes_backslash() {
        assert_eq!(reveal(&protect(r"\*not italic\*")), "*not italic*");
    }

    #[test]
    fn test_reveal_verbatim_keeps_backslash() {
        let src = r"a \* b \_ c \~ d";
        assert_eq!(reveal_verbatim(&protect(src)), src);
    }

    #[test]
    fn test_other_escapes_untouched() {
        assert_eq!(protect(r"C:\path \# \\"), r"C:\path \# \\");
    }

    #[test]
    fn test_no_escapes_is_noop() {
        assert_eq!(protect("plain *text*"), "plain *text*");
    }
}
