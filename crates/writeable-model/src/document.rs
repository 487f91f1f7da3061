use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Half-open byte range into a document's canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Normalized, span-indexed representation of input text.
///
/// Built once by the normalizer and immutable afterwards. For a fixed
/// normalizer configuration, the same input text always produces the same
/// `Document` on any machine.
///
/// Sentence spans are non-overlapping, strictly increasing in start offset,
/// and cover all non-whitespace content of the canonical text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    text: String,
    sentences: Vec<Span>,
    paragraphs: Vec<Span>,
}

impl Document {
    /// Assemble a document from canonical text and segmentation spans.
    ///
    /// Callers must supply sentence spans in document order; this is checked
    /// in debug builds only.
    pub fn new(text: String, sentences: Vec<Span>, paragraphs: Vec<Span>) -> Self {
        debug_assert!(
            sentences.windows(2).all(|w| w[0].end <= w[1].start),
            "sentence spans must be ordered and non-overlapping"
        );
        debug_assert!(
            sentences.iter().all(|span| span.end <= text.len()),
            "sentence spans must lie within the text"
        );
        Self {
            text,
            sentences,
            paragraphs,
        }
    }

    /// The canonical text all spans index into.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sentences(&self) -> &[Span] {
        &self.sentences
    }

    pub fn paragraphs(&self) -> &[Span] {
        &self.paragraphs
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Text of the sentence at `index`, if it exists.
    pub fn sentence(&self, index: usize) -> Option<&str> {
        self.sentences.get(index).map(|span| &self.text[span.range()])
    }

    /// Text of the paragraph at `index`, if it exists.
    pub fn paragraph(&self, index: usize) -> Option<&str> {
        self.paragraphs.get(index).map(|span| &self.text[span.range()])
    }

    /// Iterate sentences in document order as `(index, text)` pairs.
    pub fn iter_sentences(&self) -> impl Iterator<Item = (usize, &str)> {
        self.sentences
            .iter()
            .enumerate()
            .map(|(index, span)| (index, &self.text[span.range()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_lookup() {
        let text = "First one. Second one.".to_string();
        let document = Document::new(
            text,
            vec![Span::new(0, 10), Span::new(11, 22)],
            vec![Span::new(0, 22)],
        );
        assert_eq!(document.sentence(0), Some("First one."));
        assert_eq!(document.sentence(1), Some("Second one."));
        assert_eq!(document.sentence(2), None);
        assert_eq!(document.paragraph(0), Some("First one. Second one."));
    }

    #[test]
    fn iter_sentences_in_order() {
        let document = Document::new(
            "A. B.".to_string(),
            vec![Span::new(0, 2), Span::new(3, 5)],
            vec![Span::new(0, 5)],
        );
        let collected: Vec<(usize, &str)> = document.iter_sentences().collect();
        assert_eq!(collected, vec![(0, "A."), (1, "B.")]);
    }
}
