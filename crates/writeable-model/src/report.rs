use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::finding::{Finding, Severity};

/// Categorized output of one pipeline run.
///
/// Maps category keys to ordered finding lists. Every category declared by a
/// registered analyzer is present even when its list is empty, so callers can
/// distinguish "analyzed, no issues" from "not analyzed". Serializes as the
/// bare mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    categories: BTreeMap<String, Vec<Finding>>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a category key exists, empty if it has no findings yet.
    pub fn declare_category(&mut self, category: &str) {
        self.categories.entry(category.to_string()).or_default();
    }

    /// Append a finding to its category bucket, preserving insertion order.
    pub fn add(&mut self, finding: Finding) {
        self.categories
            .entry(finding.category.clone())
            .or_default()
            .push(finding);
    }

    /// Append several findings, preserving their order.
    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        for finding in findings {
            self.add(finding);
        }
    }

    /// Append findings to the bucket for `category`, regardless of each
    /// finding's own category field. Used by the pipeline, which buckets by
    /// the declared category of the analyzer that produced the findings.
    pub fn append(&mut self, category: &str, findings: impl IntoIterator<Item = Finding>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .extend(findings);
    }

    /// Findings for one category; `None` means the category was not analyzed.
    pub fn findings(&self, category: &str) -> Option<&[Finding]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Iterate categories in deterministic (sorted) key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Finding])> {
        self.categories
            .iter()
            .map(|(category, findings)| (category.as_str(), findings.as_slice()))
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn finding_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn error_count(&self) -> usize {
        self.count_severity(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    fn count_severity(&self, severity: Severity) -> usize {
        self.categories
            .values()
            .flatten()
            .filter(|finding| finding.severity == severity)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_category_is_present_when_empty() {
        let mut report = Report::new();
        report.declare_category("clarity");
        assert!(report.contains_category("clarity"));
        assert_eq!(report.findings("clarity"), Some(&[][..]));
        assert_eq!(report.findings("tone"), None);
    }

    #[test]
    fn findings_keep_insertion_order_within_category() {
        let mut report = Report::new();
        report.add(Finding::new("grammar", Severity::Warning, "first"));
        report.add(Finding::new("grammar", Severity::Error, "second"));
        let messages: Vec<&str> = report
            .findings("grammar")
            .expect("grammar bucket")
            .iter()
            .map(|finding| finding.message.as_str())
            .collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn severity_counts() {
        let mut report = Report::new();
        report.add(Finding::new("grammar", Severity::Error, "bad"));
        report.add(Finding::new("tone", Severity::Warning, "stiff"));
        report.add(Finding::new("tone", Severity::Info, "note"));
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
        assert_eq!(report.finding_count(), 3);
    }

    #[test]
    fn serializes_as_bare_mapping() {
        let mut report = Report::new();
        report.declare_category("grammar");
        let json = serde_json::to_string(&report).expect("serialize report");
        assert_eq!(json, r#"{"grammar":[]}"#);
    }
}
