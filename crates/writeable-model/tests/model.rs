//! Crate-level tests for the report and finding model.

use writeable_model::{Finding, Location, Report, Severity};

#[test]
fn report_roundtrips_through_json() {
    let mut report = Report::new();
    report.declare_category("tone");
    report.add(Finding::new("grammar", Severity::Error, "broken").at_sentence(1));
    report.add(Finding::new("grammar", Severity::Info, "note").at_paragraph(0));

    let json = serde_json::to_string(&report).expect("serialize");
    let round: Report = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(round, report);
    assert_eq!(round.findings("tone"), Some(&[][..]));
    assert_eq!(round.findings("grammar").map(<[Finding]>::len), Some(2));
}

#[test]
fn append_buckets_by_declared_category() {
    let mut report = Report::new();
    // The finding claims "tone" but the producing analyzer declared "style".
    report.append(
        "style",
        [Finding::new("tone", Severity::Warning, "mislabeled")],
    );
    assert!(report.contains_category("style"));
    assert!(!report.contains_category("tone"));
}

#[test]
fn locations_distinguish_sentence_and_paragraph() {
    let sentence = Finding::new("clarity", Severity::Info, "x").at_sentence(2);
    let paragraph = Finding::new("clarity", Severity::Info, "x").at_paragraph(2);
    assert_ne!(sentence.location, paragraph.location);
    assert_eq!(sentence.location, Some(Location::Sentence(2)));
}
