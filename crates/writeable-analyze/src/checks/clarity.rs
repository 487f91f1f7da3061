//! Readability checks.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use writeable_model::{Document, Finding, Severity};

use crate::analyzer::Analyzer;
use crate::checks::{word_count, words};

/// Words that introduce subordinate or chained clauses.
const SUBORDINATORS: &[&str] = &[
    "although", "because", "since", "that", "unless", "whereas", "which", "while", "whose",
];

/// Hedge and filler words that dilute a sentence.
const FILLERS: &[&str] = &[
    "actually", "basically", "fairly", "just", "quite", "rather", "really", "somewhat", "very",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarityConfig {
    /// Word count above which a sentence is flagged as hard to follow.
    pub max_sentence_words: usize,
    /// Clause marker count (commas plus subordinators) above which a
    /// sentence is flagged as deeply nested.
    pub max_clauses: usize,
    /// Filler word count at or above which a sentence is flagged.
    pub max_fillers: usize,
}

impl Default for ClarityConfig {
    fn default() -> Self {
        Self {
            max_sentence_words: 30,
            max_clauses: 3,
            max_fillers: 2,
        }
    }
}

impl ClarityConfig {
    #[must_use]
    pub fn with_max_sentence_words(mut self, threshold: usize) -> Self {
        self.max_sentence_words = threshold;
        self
    }

    #[must_use]
    pub fn with_max_clauses(mut self, threshold: usize) -> Self {
        self.max_clauses = threshold;
        self
    }
}

/// Flags sentences that are long, deeply nested, or padded with filler
/// words. Emits nothing for clear prose.
#[derive(Debug, Clone, Default)]
pub struct ClarityAnalyzer {
    config: ClarityConfig,
}

impl ClarityAnalyzer {
    pub const CATEGORY: &'static str = "clarity";

    pub fn new(config: ClarityConfig) -> Self {
        Self { config }
    }
}

impl Analyzer for ClarityAnalyzer {
    fn category(&self) -> &str {
        Self::CATEGORY
    }

    fn analyze(&self, document: &Document) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();
        for (index, sentence) in document.iter_sentences() {
            let count = word_count(sentence);
            if count > self.config.max_sentence_words {
                findings.push(
                    Finding::new(
                        Self::CATEGORY,
                        Severity::Warning,
                        format!("Sentence is {count} words long; consider splitting it."),
                    )
                    .at_sentence(index),
                );
            }

            let clauses = clause_markers(sentence);
            if clauses > self.config.max_clauses {
                findings.push(
                    Finding::new(
                        Self::CATEGORY,
                        Severity::Warning,
                        format!("Sentence chains {clauses} clauses; consider simplifying."),
                    )
                    .at_sentence(index),
                );
            }

            let fillers = filler_words(sentence);
            if fillers.len() >= self.config.max_fillers {
                findings.push(
                    Finding::new(
                        Self::CATEGORY,
                        Severity::Info,
                        format!("Contains filler words: {}.", fillers.join(", ")),
                    )
                    .at_sentence(index),
                );
            }
        }
        Ok(findings)
    }
}

fn clause_markers(sentence: &str) -> usize {
    let commas = sentence.chars().filter(|ch| *ch == ',').count();
    let subordinators = words(sentence)
        .filter(|word| {
            let lowered = word.to_lowercase();
            SUBORDINATORS.iter().any(|sub| lowered == *sub)
        })
        .count();
    commas + subordinators
}

fn filler_words(sentence: &str) -> Vec<String> {
    words(sentence)
        .map(str::to_lowercase)
        .filter(|word| FILLERS.iter().any(|filler| word == filler))
        .collect()
}
