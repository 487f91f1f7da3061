//! Whitespace canonicalization.
//!
//! Converts arbitrary pasted or extracted text into a regular form: `\n`
//! line endings, single spaces inside lines, trimmed line edges, and at most
//! one blank line between paragraphs. Zero-width characters are dropped and
//! irregular Unicode space characters become plain spaces.

/// Space-like characters that are mapped to a plain ASCII space.
const IRREGULAR_SPACES: &[char] = &[
    '\t', '\u{a0}', '\u{1680}', '\u{2000}', '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}',
    '\u{2005}', '\u{2006}', '\u{2007}', '\u{2008}', '\u{2009}', '\u{200a}', '\u{202f}',
    '\u{205f}', '\u{3000}',
];

/// Invisible characters that are removed outright.
const ZERO_WIDTH: &[char] = &['\u{200b}', '\u{200c}', '\u{200d}', '\u{feff}'];

/// Produce the canonical form of `raw`.
///
/// Deterministic: the same input always yields the same output.
pub fn canonicalize(raw: &str) -> String {
    let unified = unify_line_endings(raw);
    let cleaned: Vec<String> = unified.split('\n').map(clean_line).collect();

    // Collapse runs of blank lines to a single separator and drop blank
    // lines at either edge of the text.
    let mut out = String::with_capacity(raw.len());
    let mut separator_pending = false;
    for line in &cleaned {
        if line.is_empty() {
            separator_pending = !out.is_empty();
            continue;
        }
        if separator_pending {
            out.push_str("\n\n");
            separator_pending = false;
        } else if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line);
    }
    out
}

fn unify_line_endings(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

/// Trim a line and collapse internal whitespace runs to single spaces.
fn clean_line(line: &str) -> String {
    let mut cleaned = String::with_capacity(line.len());
    let mut space_pending = false;
    for ch in line.chars() {
        if ZERO_WIDTH.contains(&ch) {
            continue;
        }
        if ch == ' ' || IRREGULAR_SPACES.contains(&ch) {
            space_pending = !cleaned.is_empty();
            continue;
        }
        if space_pending {
            cleaned.push(' ');
            space_pending = false;
        }
        cleaned.push(ch);
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unifies_line_endings() {
        assert_eq!(canonicalize("one\r\ntwo\rthree"), "one\ntwo\nthree");
    }

    #[test]
    fn test_collapses_inline_whitespace() {
        assert_eq!(canonicalize("a \t b\u{a0}\u{a0}c"), "a b c");
    }

    #[test]
    fn test_drops_zero_width_characters() {
        assert_eq!(canonicalize("wo\u{200b}rd"), "word");
    }

    #[test]
    fn test_collapses_blank_line_runs() {
        assert_eq!(canonicalize("one\n\n\n\ntwo"), "one\n\ntwo");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(canonicalize("\n\n  hello  \n\n"), "hello");
    }

    #[test]
    fn test_idempotent_on_canonical_text() {
        let canonical = canonicalize("First line.\n\nSecond  paragraph here.");
        assert_eq!(canonicalize(&canonical), canonical);
    }
}
