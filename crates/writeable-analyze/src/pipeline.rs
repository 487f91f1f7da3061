//! Pipeline orchestration: normalize, dispatch to analyzers, merge findings.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Instant;

use tracing::{debug, info, info_span, warn};
use writeable_model::{Document, Finding, Report, Severity};
use writeable_normalize::{Result as NormalizeResult, normalize};

use crate::analyzer::Analyzer;
use crate::checks::{ClarityAnalyzer, GrammarAnalyzer, ToneAnalyzer};
use crate::options::AnalysisOptions;

/// Orchestrates a registry of analyzers over normalized documents.
///
/// The registry is fixed at construction and read-only afterwards, so one
/// pipeline instance can serve concurrent `run` calls; each call operates on
/// its own freshly built document and report.
#[derive(Default)]
pub struct AnalysisPipeline {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl AnalysisPipeline {
    /// An empty pipeline with no registered analyzers.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard registry: grammar, clarity, and tone analyzers.
    pub fn with_defaults(options: &AnalysisOptions) -> Self {
        Self::new()
            .with_analyzer(Box::new(GrammarAnalyzer::new(options.grammar)))
            .with_analyzer(Box::new(ClarityAnalyzer::new(options.clarity)))
            .with_analyzer(Box::new(ToneAnalyzer::new(options.tone)))
    }

    /// Register an analyzer. Registration order determines merge order.
    #[must_use]
    pub fn with_analyzer(mut self, analyzer: Box<dyn Analyzer>) -> Self {
        self.analyzers.push(analyzer);
        self
    }

    pub fn analyzer_count(&self) -> usize {
        self.analyzers.len()
    }

    /// Declared categories in registration order, without duplicates.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = Vec::new();
        for analyzer in &self.analyzers {
            let category = analyzer.category();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    /// Analyze raw text and return the categorized report.
    ///
    /// Analyzers run in registration order. A failing analyzer (error return
    /// or panic) contributes a single synthetic error-severity finding to its
    /// category and does not disturb the others. Every declared category is
    /// present in the report, empty or not.
    ///
    /// # Errors
    ///
    /// Only normalizer-level failures abort the run; see
    /// [`writeable_normalize::NormalizeError`].
    pub fn run(&self, raw_text: &str) -> NormalizeResult<Report> {
        let document = normalize(raw_text)?;
        Ok(self.analyze_document(&document))
    }

    /// Dispatch an already-normalized document to every registered analyzer.
    pub fn analyze_document(&self, document: &Document) -> Report {
        let span = info_span!("analysis", analyzers = self.analyzers.len());
        let _guard = span.enter();
        let start = Instant::now();

        let mut report = Report::new();
        for analyzer in &self.analyzers {
            report.declare_category(analyzer.category());
        }

        for analyzer in &self.analyzers {
            let category = analyzer.category().to_string();
            let outcome = catch_unwind(AssertUnwindSafe(|| analyzer.analyze(document)));
            match outcome {
                Ok(Ok(findings)) => {
                    debug!(
                        category = %category,
                        finding_count = findings.len(),
                        "analyzer finished"
                    );
                    report.append(&category, findings);
                }
                Ok(Err(error)) => {
                    warn!(category = %category, error = %error, "analyzer failed");
                    report.append(&category, [failure_finding(&category, &format!("{error:#}"))]);
                }
                Err(panic) => {
                    let message = panic_message(panic.as_ref());
                    warn!(category = %category, panic = %message, "analyzer panicked");
                    report.append(&category, [failure_finding(&category, &message)]);
                }
            }
        }

        info!(
            sentence_count = document.sentence_count(),
            finding_count = report.finding_count(),
            duration_ms = start.elapsed().as_millis(),
            "analysis complete"
        );
        report
    }
}

fn failure_finding(category: &str, message: &str) -> Finding {
    Finding::new(
        category,
        Severity::Error,
        format!("Analyzer failed internally: {message}"),
    )
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "analyzer panicked".to_string()
    }
}
