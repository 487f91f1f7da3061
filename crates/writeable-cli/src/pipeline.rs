//! Reusable pieces of the analyze command: document discovery, decoding,
//! and the per-document analysis step.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use writeable_analyze::AnalysisPipeline;
use writeable_model::Report;
use writeable_normalize::{NormalizeError, normalize};

/// Outcome of analyzing one document.
#[derive(Debug)]
pub struct AnalyzedDocument {
    pub name: String,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    /// Canonical text the report's locations refer to.
    pub canonical_text: String,
    pub report: Report,
}

/// Normalize `text` and run every registered analyzer over it.
pub fn analyze_text(
    pipeline: &AnalysisPipeline,
    name: &str,
    text: &str,
) -> Result<AnalyzedDocument, NormalizeError> {
    let document = normalize(text)?;
    let report = pipeline.analyze_document(&document);
    Ok(AnalyzedDocument {
        name: name.to_string(),
        sentence_count: document.sentence_count(),
        paragraph_count: document.paragraph_count(),
        canonical_text: document.text().to_string(),
        report,
    })
}

/// Whether a path looks like an analyzable document.
pub fn is_supported_document(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("txt" | "md" | "markdown")
    )
}

/// Sorted list of analyzable documents directly inside `dir`.
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|candidate| candidate.is_file() && is_supported_document(candidate))
        .collect();
    files.sort();
    if files.is_empty() {
        bail!("no .txt or .md files found in {}", dir.display());
    }
    Ok(files)
}

/// Read a text document, decoding invalid UTF-8 lossily so documents with
/// stray bytes are accepted rather than rejected.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
