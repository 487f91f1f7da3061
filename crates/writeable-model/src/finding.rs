use serde::{Deserialize, Serialize};

/// Finding severity, ordered least to most severe.
///
/// Severity only affects display ordering; the pipeline never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Where in the document a finding points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "scope", content = "index")]
pub enum Location {
    /// Sentence index, in document order.
    Sentence(usize),
    /// Paragraph index, in document order.
    Paragraph(usize),
}

/// A single issue detected by one analyzer.
///
/// Immutable value object; created by exactly one analyzer and never mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Report bucket this finding belongs to (declared by its analyzer).
    pub category: String,
    /// Human-readable description of the issue.
    pub message: String,
    /// Span the finding refers to; `None` for document-wide findings.
    pub location: Option<Location>,
    /// Severity level.
    pub severity: Severity,
}

impl Finding {
    pub fn new(
        category: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
            location: None,
            severity,
        }
    }

    /// Attach a sentence location.
    #[must_use]
    pub fn at_sentence(mut self, index: usize) -> Self {
        self.location = Some(Location::Sentence(index));
        self
    }

    /// Attach a paragraph location.
    #[must_use]
    pub fn at_paragraph(mut self, index: usize) -> Self {
        self.location = Some(Location::Paragraph(index));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_least_to_most_severe() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn finding_builder_sets_location() {
        let finding = Finding::new("grammar", Severity::Warning, "missing period").at_sentence(3);
        assert_eq!(finding.location, Some(Location::Sentence(3)));
        assert_eq!(finding.category, "grammar");
    }

    #[test]
    fn location_serializes_with_scope_tag() {
        let json = serde_json::to_string(&Location::Sentence(2)).expect("serialize location");
        assert_eq!(json, r#"{"scope":"sentence","index":2}"#);
    }
}
