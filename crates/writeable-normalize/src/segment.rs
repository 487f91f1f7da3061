//! Sentence and paragraph segmentation over canonical text.
//!
//! Operates on output of [`crate::whitespace::canonicalize`], which guarantees
//! that whitespace is limited to single spaces, single newlines, and `\n\n`
//! paragraph separators.

use writeable_model::Span;

const TERMINALS: &[char] = &['.', '!', '?'];
const CLOSERS: &[char] = &['"', '\'', ')', ']', '\u{201d}', '\u{2019}'];
const OPENERS: &[char] = &['"', '\'', '(', '[', '\u{201c}', '\u{2018}'];

/// Words that end with a period without ending a sentence. Compared
/// case-insensitively against the word preceding the period; single letters
/// (initials) are always treated as abbreviations.
const ABBREVIATIONS: &[&str] = &[
    "al", "approx", "co", "dr", "e.g", "etc", "fig", "i.e", "inc", "jr", "ltd", "mr", "mrs", "ms",
    "no", "prof", "sr", "st", "vol", "vs",
];

/// Paragraph spans of canonical text, split on blank-line separators.
///
/// Text with no blank lines yields a single paragraph.
pub fn paragraph_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start = 0usize;
    for (idx, _) in text.match_indices("\n\n") {
        if idx > start {
            spans.push(Span::new(start, idx));
        }
        start = idx + 2;
    }
    if start < text.len() {
        spans.push(Span::new(start, text.len()));
    }
    spans
}

/// Sentence spans within one paragraph, offset by `base` into the full text.
///
/// A sentence ends at terminal punctuation (plus any closing quotes or
/// brackets) followed by whitespace and a capital letter, digit, or opening
/// quote, or by the end of the paragraph. Text with no terminal punctuation
/// is one sentence.
pub fn sentence_spans(paragraph: &str, base: usize) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut chars = paragraph.char_indices().peekable();
    let mut sentence_start: Option<usize> = None;

    while let Some((idx, ch)) = chars.next() {
        if sentence_start.is_none() {
            if ch.is_whitespace() {
                continue;
            }
            sentence_start = Some(idx);
        }
        if !TERMINALS.contains(&ch) {
            continue;
        }
        let mut end = idx + ch.len_utf8();
        while let Some(&(closer_idx, closer)) = chars.peek() {
            if !CLOSERS.contains(&closer) {
                break;
            }
            end = closer_idx + closer.len_utf8();
            chars.next();
        }
        if ch == '.' && is_abbreviation(paragraph, idx) {
            continue;
        }
        if boundary_follows(paragraph, end) {
            let start = sentence_start.take().unwrap_or(idx);
            spans.push(Span::new(base + start, base + end));
        }
    }

    if let Some(start) = sentence_start {
        let end = paragraph.trim_end().len();
        if end > start {
            spans.push(Span::new(base + start, base + end));
        }
    }
    spans
}

/// True when the text after a candidate terminal reads like a new sentence.
fn boundary_follows(paragraph: &str, end: usize) -> bool {
    let rest = &paragraph[end..];
    match rest.chars().next() {
        None => true,
        Some(ch) if !ch.is_whitespace() => false,
        Some(_) => match rest.trim_start().chars().next() {
            None => true,
            Some(next) => {
                next.is_uppercase() || next.is_ascii_digit() || OPENERS.contains(&next)
            }
        },
    }
}

fn is_abbreviation(paragraph: &str, period_idx: usize) -> bool {
    let before = &paragraph[..period_idx];
    // Canonical whitespace is ASCII space or newline, so +1 stays on a char
    // boundary.
    let word_start = before
        .rfind(char::is_whitespace)
        .map(|idx| idx + 1)
        .unwrap_or(0);
    let word = before[word_start..].trim_start_matches(|ch| OPENERS.contains(&ch));
    if word.is_empty() {
        return false;
    }
    let mut word_chars = word.chars();
    if let (Some(first), None) = (word_chars.next(), word_chars.next())
        && first.is_alphabetic()
    {
        return true;
    }
    let lowered = word.to_lowercase();
    ABBREVIATIONS.iter().any(|abbr| lowered == *abbr)
}
