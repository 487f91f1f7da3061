//! Analyzer implementations.
//!
//! Each module implements one detection strategy behind the [`crate::Analyzer`]
//! trait and declares the category it populates.

mod clarity;
mod grammar;
mod tone;

pub use clarity::{ClarityAnalyzer, ClarityConfig};
pub use grammar::{GrammarAnalyzer, GrammarConfig};
pub use tone::{Register, ToneAnalyzer, ToneConfig};

/// Iterate the words of a sentence. Apostrophes stay inside words so
/// contractions ("don't") survive as single tokens.
pub(crate) fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|ch: char| !(ch.is_alphanumeric() || ch == '\''))
        .map(|word| word.trim_matches('\''))
        .filter(|word| !word.is_empty())
}

pub(crate) fn word_count(text: &str) -> usize {
    words(text).count()
}
