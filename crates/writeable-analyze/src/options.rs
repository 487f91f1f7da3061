//! Configuration options for the analysis pipeline.

use serde::{Deserialize, Serialize};

use crate::checks::{ClarityConfig, GrammarConfig, Register, ToneConfig};

/// Options for the default analyzer set.
///
/// Analyzers are pure functions of `(document, configuration)`; these values
/// are fixed when the pipeline is built.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub grammar: GrammarConfig,
    pub clarity: ClarityConfig,
    pub tone: ToneConfig,
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_run_on_words(mut self, threshold: usize) -> Self {
        self.grammar.run_on_words = threshold;
        self
    }

    #[must_use]
    pub fn with_max_sentence_words(mut self, threshold: usize) -> Self {
        self.clarity.max_sentence_words = threshold;
        self
    }

    #[must_use]
    pub fn with_register(mut self, target: Register) -> Self {
        self.tone.target = target;
        self
    }
}
