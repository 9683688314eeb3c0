pub mod delimited;
pub mod docx;
pub mod lopdf;
pub mod pdf;
pub mod pdftotext;
pub mod spreadsheet;
pub mod text;

use std::fmt;

use serde::Serialize;

use crate::error::ExtractError;

/// Outcome of one extraction call: either the extracted text or a
/// human-readable diagnostic. Never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "content", rename_all = "snake_case")]
pub enum ExtractionResult {
    Text(String),
    Diagnostic(String),
}

impl ExtractionResult {
    /// Successful extraction; surrounding whitespace is trimmed.
    pub fn text(s: impl AsRef<str>) -> Self {
        ExtractionResult::Text(s.as_ref().trim().to_string())
    }

    pub fn diagnostic(message: impl Into<String>) -> Self {
        ExtractionResult::Diagnostic(message.into())
    }

    pub fn is_diagnostic(&self) -> bool {
        matches!(self, ExtractionResult::Diagnostic(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            ExtractionResult::Text(s) | ExtractionResult::Diagnostic(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            ExtractionResult::Text(s) | ExtractionResult::Diagnostic(s) => s,
        }
    }
}

impl fmt::Display for ExtractionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a parser outcome into a result, prefixing failures with `prefix`.
pub(crate) fn finish(outcome: Result<String, ExtractError>, prefix: &str) -> ExtractionResult {
    match outcome {
        Ok(text) => ExtractionResult::text(text),
        Err(e) => {
            log::warn!("{prefix}: {e}");
            ExtractionResult::diagnostic(format!("{prefix}: {e}"))
        }
    }
}

/// Text of a single PDF page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, ExtractError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_trimmed() {
        assert_eq!(
            ExtractionResult::text("  hello \n"),
            ExtractionResult::Text("hello".into())
        );
    }

    #[test]
    fn finish_prefixes_errors() {
        let result = finish(Err(ExtractError::Malformed("bad".into())), "Error reading PDF");
        assert_eq!(result, ExtractionResult::Diagnostic("Error reading PDF: bad".into()));
        assert!(result.is_diagnostic());
    }

    #[test]
    fn into_string_yields_payload_of_either_kind() {
        assert_eq!(ExtractionResult::text(" body ").into_string(), "body");
        let diagnostic = ExtractionResult::diagnostic("Error reading TXT file: gone");
        assert_eq!(diagnostic.into_string(), "Error reading TXT file: gone");
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_string(&ExtractionResult::Text("hi".into())).unwrap();
        assert_eq!(json, r#"{"status":"text","content":"hi"}"#);
    }
}
