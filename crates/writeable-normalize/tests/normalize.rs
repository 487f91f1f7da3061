//! Integration tests for the normalizer's documented invariants.

use proptest::prelude::*;
use writeable_model::Document;
use writeable_normalize::{NormalizeError, normalize};

/// Sentence spans must be ordered, non-overlapping, char-aligned, and must
/// cover every non-whitespace character of the canonical text.
fn assert_span_invariants(document: &Document) {
    let text = document.text();
    let sentences = document.sentences();

    for pair in sentences.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "sentence spans overlap or regress: {pair:?}"
        );
    }
    for span in sentences {
        assert!(span.start < span.end, "empty sentence span: {span:?}");
        assert!(span.end <= text.len(), "span past end of text: {span:?}");
        assert!(text.is_char_boundary(span.start) && text.is_char_boundary(span.end));
    }

    let mut covered = vec![false; text.len()];
    for span in sentences {
        for idx in span.range() {
            covered[idx] = true;
        }
    }
    for (idx, ch) in text.char_indices() {
        if !ch.is_whitespace() {
            assert!(
                covered[idx],
                "non-whitespace char {ch:?} at {idx} not covered by any sentence"
            );
        }
    }
}

#[test]
fn mixed_document_holds_invariants() {
    let input = "Dr. Jones reviewed the draft. It was fine!\r\n\r\nA second\tparagraph, with 3.5 issues? Perhaps.";
    let document = normalize(input).expect("normalize");
    assert_span_invariants(&document);
    assert_eq!(document.paragraph_count(), 2);
    assert_eq!(document.sentence_count(), 4);
}

#[test]
fn whitespace_only_inputs_fail_without_a_document() {
    for input in ["", " ", "\n\n\n", "\t \r\n"] {
        assert_eq!(normalize(input), Err(NormalizeError::EmptyInput));
    }
}

#[test]
fn single_sentence_document() {
    let document = normalize("just a fragment without an ending").expect("normalize");
    assert_eq!(document.sentence_count(), 1);
    assert_eq!(document.paragraph_count(), 1);
    assert_eq!(
        document.sentence(0),
        Some("just a fragment without an ending")
    );
}

proptest! {
    #[test]
    fn invariants_hold_for_arbitrary_ascii(raw in "[ -~\n\t]{0,300}") {
        match normalize(&raw) {
            Ok(document) => assert_span_invariants(&document),
            Err(NormalizeError::EmptyInput) => prop_assert!(raw.trim().is_empty()),
        }
    }

    #[test]
    fn normalize_is_deterministic(raw in "[ -~\n\t]{0,300}") {
        prop_assert_eq!(normalize(&raw), normalize(&raw));
    }

    #[test]
    fn canonical_text_is_a_fixed_point(raw in "[a-zA-Z .!?\n]{1,200}") {
        if let Ok(document) = normalize(&raw) {
            let again = normalize(document.text()).expect("canonical text is non-empty");
            prop_assert_eq!(again.text(), document.text());
        }
    }
}
