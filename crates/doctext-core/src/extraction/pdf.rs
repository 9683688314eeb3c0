use crate::error::ExtractError;
use crate::extraction::{finish, ExtractionResult, PageContent, PdfExtractor};
use crate::input::InputDocument;

/// Read a PDF through `extractor`, one page per block of lines.
pub fn extract_pdf(doc: &mut InputDocument, extractor: &dyn PdfExtractor) -> ExtractionResult {
    let outcome = doc
        .read_all()
        .map_err(ExtractError::from)
        .and_then(|bytes| extractor.extract_pages(&bytes))
        .map(|pages| {
            log::debug!(
                "{} extracted {} page(s)",
                extractor.backend_name(),
                pages.len()
            );
            join_pages(&pages)
        });
    finish(outcome, "Error reading PDF")
}

/// Each page's text followed by a newline, in page order.
pub fn join_pages(pages: &[PageContent]) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(&page.text);
        text.push('\n');
    }
    text
}
