//! Register checks.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use writeable_model::{Document, Finding, Severity};

use crate::analyzer::Analyzer;
use crate::checks::words;

/// Vocabulary that reads as stiff or legalistic.
const FORMAL_WORDS: &[&str] = &[
    "aforementioned", "aforesaid", "commence", "endeavor", "forthwith", "henceforth", "herein",
    "heretofore", "notwithstanding", "pursuant", "thusly", "utilize", "whilst",
];

/// Vocabulary that reads as conversational.
const CASUAL_WORDS: &[&str] = &[
    "awesome", "btw", "cool", "gonna", "guys", "kinda", "lol", "okay", "sorta", "stuff", "wanna",
    "yeah",
];

/// Target register the document is written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Register {
    Formal,
    #[default]
    Neutral,
    Casual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToneConfig {
    pub target: Register,
}

impl ToneConfig {
    #[must_use]
    pub fn with_target(mut self, target: Register) -> Self {
        self.target = target;
        self
    }
}

/// Flags sentences whose vocabulary pulls away from the target register.
///
/// Under a `Neutral` target both directions are reported as informational;
/// an explicit target upgrades the opposite direction to a warning.
#[derive(Debug, Clone, Default)]
pub struct ToneAnalyzer {
    config: ToneConfig,
}

impl ToneAnalyzer {
    pub const CATEGORY: &'static str = "tone";

    pub fn new(config: ToneConfig) -> Self {
        Self { config }
    }
}

impl Analyzer for ToneAnalyzer {
    fn category(&self) -> &str {
        Self::CATEGORY
    }

    fn analyze(&self, document: &Document) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();
        for (index, sentence) in document.iter_sentences() {
            let formal = matched_words(sentence, FORMAL_WORDS);
            if !formal.is_empty() && self.config.target != Register::Formal {
                let severity = if self.config.target == Register::Casual {
                    Severity::Warning
                } else {
                    Severity::Info
                };
                findings.push(
                    Finding::new(
                        Self::CATEGORY,
                        severity,
                        format!("May sound overly formal: uses {}.", quote_list(&formal)),
                    )
                    .at_sentence(index),
                );
            }

            let casual = matched_words(sentence, CASUAL_WORDS);
            if !casual.is_empty() && self.config.target != Register::Casual {
                let severity = if self.config.target == Register::Formal {
                    Severity::Warning
                } else {
                    Severity::Info
                };
                findings.push(
                    Finding::new(
                        Self::CATEGORY,
                        severity,
                        format!("May sound overly casual: uses {}.", quote_list(&casual)),
                    )
                    .at_sentence(index),
                );
            }
        }
        Ok(findings)
    }
}

fn matched_words(sentence: &str, lexicon: &[&str]) -> Vec<String> {
    let mut matched = Vec::new();
    for word in words(sentence) {
        let lowered = word.to_lowercase();
        if lexicon.iter().any(|entry| lowered == *entry) && !matched.contains(&lowered) {
            matched.push(lowered);
        }
    }
    matched
}

fn quote_list(matched: &[String]) -> String {
    matched
        .iter()
        .map(|word| format!("\"{word}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use writeable_normalize::normalize;

    fn analyze_with(target: Register, text: &str) -> Vec<Finding> {
        let document = normalize(text).expect("normalize");
        ToneAnalyzer::new(ToneConfig::default().with_target(target))
            .analyze(&document)
            .expect("analyze")
    }

    #[test]
    fn neutral_target_reports_both_directions_as_info() {
        let findings = analyze_with(
            Register::Neutral,
            "We shall commence forthwith. That was awesome stuff.",
        );
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.severity == Severity::Info));
        assert!(findings[0].message.contains("formal"));
        assert!(findings[1].message.contains("casual"));
    }

    #[test]
    fn formal_target_warns_on_casual_words_only() {
        let findings = analyze_with(
            Register::Formal,
            "We shall commence forthwith. That was awesome stuff.",
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].message.contains("casual"));
    }

    #[test]
    fn casual_target_warns_on_formal_words_only() {
        let findings = analyze_with(Register::Casual, "Pursuant to the aforementioned plan.");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].message.contains("\"pursuant\", \"aforementioned\""));
    }

    #[test]
    fn matched_register_emits_nothing() {
        assert!(analyze_with(Register::Casual, "That was awesome stuff, yeah.").is_empty());
    }
}
