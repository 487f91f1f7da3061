use std::path::PathBuf;

use writeable_model::Report;

#[derive(Debug)]
pub struct AnalyzeResult {
    pub documents: Vec<DocumentSummary>,
    pub errors: Vec<String>,
    /// Gating outcome: true when hard errors occurred, or when error-severity
    /// findings are present and gating was not disabled.
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct DocumentSummary {
    /// Display name: file name, "stdin", or "inline text".
    pub name: String,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub report: Report,
    pub json_report: Option<PathBuf>,
}
