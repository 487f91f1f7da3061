mod analyzer;
pub mod checks;
mod options;
mod pipeline;

pub use analyzer::Analyzer;
pub use checks::{
    ClarityAnalyzer, ClarityConfig, GrammarAnalyzer, GrammarConfig, Register, ToneAnalyzer,
    ToneConfig,
};
pub use options::AnalysisOptions;
pub use pipeline::AnalysisPipeline;
pub use writeable_normalize::NormalizeError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pipeline_declares_three_categories() {
        let pipeline = AnalysisPipeline::with_defaults(&AnalysisOptions::default());
        assert_eq!(pipeline.categories(), vec!["grammar", "clarity", "tone"]);
    }

    #[test]
    fn empty_input_propagates_without_a_report() {
        let pipeline = AnalysisPipeline::with_defaults(&AnalysisOptions::default());
        assert_eq!(pipeline.run("  \n "), Err(NormalizeError::EmptyInput));
    }
}
