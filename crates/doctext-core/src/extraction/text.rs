use crate::encoding::{decode_stream, TextEncoding};
use crate::extraction::{finish, ExtractionResult};
use crate::input::InputDocument;

/// Read a plain-text document, falling back through `candidates` until one
/// decodes it.
pub fn extract_text(doc: &mut InputDocument, candidates: &[TextEncoding]) -> ExtractionResult {
    let outcome = decode_stream(doc, candidates).map(|decoded| decoded.text);
    finish(outcome, "Error reading TXT file")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::TEXT_CANDIDATES;

    #[test]
    fn utf8_text_is_trimmed() {
        let mut doc = InputDocument::from_bytes("a.txt", "\n  héllo wörld \n\n".as_bytes().to_vec());
        assert_eq!(
            extract_text(&mut doc, TEXT_CANDIDATES),
            ExtractionResult::Text("héllo wörld".into())
        );
    }

    #[test]
    fn latin1_fallback() {
        let mut doc = InputDocument::from_bytes("a.txt", b"na\xefve caf\xe9".to_vec());
        assert_eq!(
            extract_text(&mut doc, TEXT_CANDIDATES),
            ExtractionResult::Text("naïve café".into())
        );
    }

    #[test]
    fn exhausted_override_is_reported_as_txt_error() {
        let mut doc = InputDocument::from_bytes("a.txt", b"\xff".to_vec());
        let result = extract_text(&mut doc, &[TextEncoding::Utf8]);
        assert_eq!(
            result,
            ExtractionResult::Diagnostic(
                "Error reading TXT file: could not decode text with any of: utf-8".into()
            )
        );
    }
}
