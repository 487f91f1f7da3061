//! Sentence-structure checks.

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use writeable_model::{Document, Finding, Severity};

use crate::analyzer::Analyzer;
use crate::checks::{word_count, words};

/// Singular subject paired with a plural verb form.
static SINGULAR_PLURAL_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(he|she|it|this|that)\s+(don't|weren't)\b").expect("invalid agreement regex")
});

/// Plural subject paired with a singular verb form.
static PLURAL_SINGULAR_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(they|we|you|these|those)\s+(doesn't|was|wasn't)\b")
        .expect("invalid agreement regex")
});

/// Trailing characters that may legitimately follow terminal punctuation.
const TRAILING_CLOSERS: &[char] = &['"', '\'', ')', ']', '\u{201d}', '\u{2019}'];

const TERMINALS: &[char] = &['.', '!', '?'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarConfig {
    /// Word count above which a sentence is flagged as a possible run-on.
    pub run_on_words: usize,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self { run_on_words: 40 }
    }
}

impl GrammarConfig {
    #[must_use]
    pub fn with_run_on_words(mut self, threshold: usize) -> Self {
        self.run_on_words = threshold;
        self
    }
}

/// Flags structural issues: missing terminal punctuation, run-on sentences,
/// repeated words, missing leading capitals, and simple subject-verb
/// disagreement patterns.
#[derive(Debug, Clone, Default)]
pub struct GrammarAnalyzer {
    config: GrammarConfig,
}

impl GrammarAnalyzer {
    pub const CATEGORY: &'static str = "grammar";

    pub fn new(config: GrammarConfig) -> Self {
        Self { config }
    }
}

impl Analyzer for GrammarAnalyzer {
    fn category(&self) -> &str {
        Self::CATEGORY
    }

    fn analyze(&self, document: &Document) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();
        for (index, sentence) in document.iter_sentences() {
            if missing_terminal(sentence) {
                findings.push(
                    Finding::new(
                        Self::CATEGORY,
                        Severity::Warning,
                        "Sentence may be missing terminal punctuation.",
                    )
                    .at_sentence(index),
                );
            }

            let count = word_count(sentence);
            if count > self.config.run_on_words {
                findings.push(
                    Finding::new(
                        Self::CATEGORY,
                        Severity::Warning,
                        format!("Possible run-on sentence: {count} words without a break."),
                    )
                    .at_sentence(index),
                );
            }

            if let Some(word) = first_doubled_word(sentence) {
                findings.push(
                    Finding::new(
                        Self::CATEGORY,
                        Severity::Warning,
                        format!("Repeated word \"{word}\"."),
                    )
                    .at_sentence(index),
                );
            }

            if starts_lowercase(sentence) {
                findings.push(
                    Finding::new(
                        Self::CATEGORY,
                        Severity::Info,
                        "Sentence does not start with a capital letter.",
                    )
                    .at_sentence(index),
                );
            }

            for matched in agreement_issues(sentence) {
                findings.push(
                    Finding::new(
                        Self::CATEGORY,
                        Severity::Warning,
                        format!("Possible subject-verb disagreement: \"{matched}\"."),
                    )
                    .at_sentence(index),
                );
            }
        }
        Ok(findings)
    }
}

fn missing_terminal(sentence: &str) -> bool {
    let trimmed = sentence.trim_end_matches(TRAILING_CLOSERS);
    !trimmed.ends_with(TERMINALS)
}

fn starts_lowercase(sentence: &str) -> bool {
    let stripped = sentence.trim_start_matches(|ch: char| !ch.is_alphanumeric());
    match stripped.chars().next() {
        Some(first) => first.is_lowercase(),
        None => false,
    }
}

fn first_doubled_word(sentence: &str) -> Option<String> {
    let mut previous: Option<String> = None;
    for word in words(sentence) {
        let lowered = word.to_lowercase();
        if previous.as_deref() == Some(lowered.as_str()) {
            return Some(lowered);
        }
        previous = Some(lowered);
    }
    None
}

fn agreement_issues(sentence: &str) -> Vec<String> {
    let mut matches = Vec::new();
    for regex in [&*SINGULAR_PLURAL_VERB, &*PLURAL_SINGULAR_VERB] {
        for matched in regex.find_iter(sentence) {
            matches.push(matched.as_str().to_string());
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use writeable_normalize::normalize;

    fn analyze(text: &str) -> Vec<Finding> {
        let document = normalize(text).expect("normalize");
        GrammarAnalyzer::default()
            .analyze(&document)
            .expect("analyze")
    }

    #[test]
    fn clean_text_has_no_findings() {
        assert!(analyze("This is fine. This is also fine and clear.").is_empty());
    }

    #[test]
    fn missing_punctuation_is_flagged() {
        let findings = analyze("this has no ending");
        assert!(
            findings
                .iter()
                .any(|finding| finding.message.contains("terminal punctuation"))
        );
    }

    #[test]
    fn quoted_terminal_counts_as_punctuated() {
        let findings = analyze("She said \"stop.\"");
        assert!(
            !findings
                .iter()
                .any(|finding| finding.message.contains("terminal punctuation"))
        );
    }

    #[test]
    fn run_on_respects_configured_threshold() {
        let analyzer = GrammarAnalyzer::new(GrammarConfig::default().with_run_on_words(5));
        let document = normalize("One two three four five six seven.").expect("normalize");
        let findings = analyzer.analyze(&document).expect("analyze");
        assert!(
            findings
                .iter()
                .any(|finding| finding.message.contains("run-on"))
        );
    }

    #[test]
    fn doubled_word_is_reported_once() {
        let findings = analyze("The the report is ready.");
        let doubled: Vec<&Finding> = findings
            .iter()
            .filter(|finding| finding.message.contains("Repeated word"))
            .collect();
        assert_eq!(doubled.len(), 1);
        assert!(doubled[0].message.contains("\"the\""));
    }

    #[test]
    fn agreement_patterns_are_flagged() {
        let findings = analyze("It don't work. They was late.");
        let agreement: Vec<&str> = findings
            .iter()
            .filter(|finding| finding.message.contains("disagreement"))
            .map(|finding| finding.message.as_str())
            .collect();
        assert_eq!(agreement.len(), 2);
    }

    #[test]
    fn findings_carry_sentence_locations() {
        let findings = analyze("This one is good. but this one is not");
        for finding in &findings {
            assert!(finding.location.is_some());
        }
    }
}
