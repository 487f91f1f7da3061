//! Stable JSON serialization of analysis reports.
//!
//! The payload carries a schema identifier and version so downstream
//! consumers can detect format changes, plus a content hash of the analyzed
//! text so a report can be matched back to its document.

pub mod hash;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use writeable_model::{Location, Report, Severity};

pub use hash::sha256_hex;

const REPORT_SCHEMA: &str = "writeable.analysis-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

const REPORT_FILE_NAME: &str = "analysis_report.json";

#[derive(Debug, Serialize)]
pub struct ReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub document_sha256: String,
    pub finding_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub finding_count: usize,
    pub findings: Vec<FindingJson>,
}

#[derive(Debug, Serialize)]
pub struct FindingJson {
    pub severity: Severity,
    pub message: String,
    pub location: Option<Location>,
}

/// Assemble the payload for a report over `source_text`.
///
/// `generated_at` is injected by the caller so that everything else in the
/// payload is a pure function of the inputs.
pub fn build_payload(source_text: &str, report: &Report, generated_at: String) -> ReportPayload {
    ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at,
        document_sha256: sha256_hex(source_text.as_bytes()),
        finding_count: report.finding_count(),
        error_count: report.error_count(),
        warning_count: report.warning_count(),
        categories: report
            .iter()
            .map(|(category, findings)| CategorySummary {
                category: category.to_string(),
                finding_count: findings.len(),
                findings: findings
                    .iter()
                    .map(|finding| FindingJson {
                        severity: finding.severity,
                        message: finding.message.clone(),
                        location: finding.location,
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Render the report payload as pretty-printed JSON.
pub fn render_json(source_text: &str, report: &Report) -> Result<String> {
    let payload = build_payload(source_text, report, Utc::now().to_rfc3339());
    let json = serde_json::to_string_pretty(&payload).context("serialize report payload")?;
    Ok(json)
}

/// Write the JSON report into `output_dir`, returning the file path.
pub fn write_report_json(output_dir: &Path, source_text: &str, report: &Report) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;
    let output_path = output_dir.join(REPORT_FILE_NAME);
    let json = render_json(source_text, report)?;
    std::fs::write(&output_path, format!("{json}\n"))
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(output_path)
}
