use ::lopdf::Document;

use crate::error::ExtractError;
use crate::extraction::{PageContent, PdfExtractor};

/// Pure Rust PDF text extraction backed by lopdf.
///
/// Needs no external tools. Pages whose content streams cannot be decoded
/// (scans, unusual fonts) come back as empty text rather than failing the
/// whole document.
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        LopdfExtractor
    }
}

impl Default for LopdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, ExtractError> {
        let document = Document::load_mem(pdf_bytes)?;
        if document.is_encrypted() {
            return Err(ExtractError::Encrypted);
        }

        let pages = document
            .get_pages()
            .into_keys()
            .map(|number| {
                let mut text = document.extract_text(&[number]).unwrap_or_else(|e| {
                    log::warn!("no text extracted from page {number}: {e}");
                    String::new()
                });
                // lopdf ends each text object with a newline; pages are
                // separated by the caller.
                text.truncate(text.trim_end_matches(['\r', '\n']).len());
                PageContent {
                    page_number: number as usize,
                    text,
                }
            })
            .collect();

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::pdf::extract_pdf;
    use crate::extraction::ExtractionResult;
    use crate::input::InputDocument;
    use ::lopdf::content::{Content, Operation};
    use ::lopdf::{dictionary, Object, Stream};

    fn pdf_with_pages(lines: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for line in lines {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let media_box: Vec<Object> = vec![0.into(), 0.into(), 595.into(), 842.into()];
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => media_box,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn pages_come_back_in_order_without_trailing_newline() {
        let pages = LopdfExtractor::new()
            .extract_pages(&pdf_with_pages(&["Hello page one", "Second page"]))
            .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[0].text, "Hello page one");
        assert_eq!(pages[1].page_number, 2);
        assert_eq!(pages[1].text, "Second page");
    }

    #[test]
    fn two_page_document_joins_with_single_newline() {
        let mut doc = InputDocument::from_bytes(
            "report.pdf",
            pdf_with_pages(&["Hello page one", "Second page"]),
        );
        let result = extract_pdf(&mut doc, &LopdfExtractor::new());
        assert_eq!(
            result,
            ExtractionResult::Text("Hello page one\nSecond page".into())
        );
    }

    #[test]
    fn garbage_is_rejected() {
        let err = LopdfExtractor::new()
            .extract_pages(b"%PDF-1.4 this is not really a pdf")
            .unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(_)), "{err}");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(LopdfExtractor::new().extract_pages(&[]).is_err());
    }
}
