pub mod error;
pub mod segment;
pub mod whitespace;

pub use error::{NormalizeError, Result};

use tracing::debug;
use writeable_model::Document;

/// Convert raw text into a canonical, span-indexed [`Document`].
///
/// # Errors
///
/// Returns [`NormalizeError::EmptyInput`] when the input is empty or
/// whitespace-only after trimming.
pub fn normalize(raw_text: &str) -> Result<Document> {
    if raw_text.trim().is_empty() {
        return Err(NormalizeError::EmptyInput);
    }
    let text = whitespace::canonicalize(raw_text);
    // Inputs made of zero-width characters survive the trim check but
    // canonicalize to nothing.
    if text.is_empty() {
        return Err(NormalizeError::EmptyInput);
    }

    let paragraphs = segment::paragraph_spans(&text);
    let mut sentences = Vec::new();
    for paragraph in &paragraphs {
        sentences.extend(segment::sentence_spans(
            &text[paragraph.range()],
            paragraph.start,
        ));
    }
    debug!(
        paragraph_count = paragraphs.len(),
        sentence_count = sentences.len(),
        "normalized document"
    );
    Ok(Document::new(text, sentences, paragraphs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(normalize(""), Err(NormalizeError::EmptyInput));
        assert_eq!(normalize("   \n\t  "), Err(NormalizeError::EmptyInput));
    }

    #[test]
    fn zero_width_only_input_is_rejected() {
        assert_eq!(normalize("\u{200b}\u{feff}"), Err(NormalizeError::EmptyInput));
    }

    #[test]
    fn sentences_and_paragraphs_are_indexed() {
        let document = normalize("First point here. Second point here.\n\nNew paragraph.")
            .expect("normalize");
        assert_eq!(document.sentence_count(), 3);
        assert_eq!(document.paragraph_count(), 2);
        assert_eq!(document.sentence(0), Some("First point here."));
        assert_eq!(document.sentence(2), Some("New paragraph."));
    }

    #[test]
    fn normalization_is_deterministic() {
        let input = "Some text.  With   odd\u{a0}spacing.\r\n\r\n\r\nAnd paragraphs.";
        assert_eq!(normalize(input), normalize(input));
    }
}
