pub mod document;
pub mod finding;
pub mod report;

pub use document::{Document, Span};
pub use finding::{Finding, Location, Severity};
pub use report::Report;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finding_roundtrips_through_json() {
        let finding = Finding::new("tone", Severity::Info, "sounds formal").at_sentence(4);
        let json = serde_json::to_string(&finding).expect("serialize finding");
        let round: Finding = serde_json::from_str(&json).expect("deserialize finding");
        assert_eq!(round, finding);
    }

    #[test]
    fn report_with_findings_serializes_by_category() {
        let mut report = Report::new();
        report.declare_category("clarity");
        report.add(Finding::new("grammar", Severity::Warning, "possible run-on").at_sentence(0));
        let json = serde_json::to_string(&report).expect("serialize report");
        assert!(json.starts_with(r#"{"clarity":[],"grammar":["#));
    }
}
