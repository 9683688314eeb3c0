use crate::error::ExtractError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// With `layout` set, runs `pdftotext -layout` to keep column alignment.
pub struct PdftotextExtractor {
    layout: bool,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor { layout: false }
    }

    pub fn with_layout(layout: bool) -> Self {
        PdftotextExtractor { layout }
    }

    /// Whether a `pdftotext` binary can be launched from `PATH`.
    pub fn is_available() -> bool {
        match Command::new("pdftotext").arg("-v").output() {
            // older poppler builds exit non-zero for -v but still print a banner
            Ok(output) => output.status.success() || !output.stderr.is_empty(),
            Err(e) => {
                log::debug!("cannot launch pdftotext: {e}");
                false
            }
        }
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, ExtractError> {
        // pdftotext only reads from a path
        let mut tmpfile = tempfile::NamedTempFile::new()?;
        tmpfile.write_all(pdf_bytes)?;

        let mut command = Command::new("pdftotext");
        if self.layout {
            command.arg("-layout");
        }
        let output = command
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ExtractError::PdftotextNotFound
                } else {
                    ExtractError::Malformed(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ExtractError::PdftotextFailed { code, stderr });
        }

        Ok(split_pages(&String::from_utf8_lossy(&output.stdout)))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// pdftotext ends every page with a form feed, so the piece after the last
/// one is not a page.
fn split_pages(output: &str) -> Vec<PageContent> {
    let body = output.strip_suffix('\x0c').unwrap_or(output);
    body.split('\x0c')
        .enumerate()
        .map(|(i, text)| PageContent {
            page_number: i + 1,
            text: text.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_feeds_separate_pages() {
        let pages = split_pages("one\n\x0c\x0cthree\n\x0c");
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].text, "one\n");
        assert_eq!(pages[1].text, "");
        assert_eq!(pages[2].page_number, 3);
        assert_eq!(pages[2].text, "three\n");
    }

    #[test]
    fn availability_agrees_with_extraction() {
        let err = PdftotextExtractor::new()
            .extract_pages(b"not a pdf at all")
            .unwrap_err();
        if PdftotextExtractor::is_available() {
            assert!(matches!(err, ExtractError::PdftotextFailed { .. }), "{err}");
        } else {
            assert!(matches!(err, ExtractError::PdftotextNotFound), "{err}");
        }
    }

    #[test]
    fn output_without_trailing_form_feed() {
        let pages = split_pages("solo");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].text, "solo");
    }
}
