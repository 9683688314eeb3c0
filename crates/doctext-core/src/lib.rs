pub mod config;
pub mod encoding;
pub mod error;
pub mod extraction;
pub mod flatten;
pub mod format;
pub mod input;
pub mod table;

use config::{ExtractorConfig, PdfBackend};
use error::ExtractError;
use extraction::lopdf::LopdfExtractor;
use extraction::pdftotext::PdftotextExtractor;
use format::{format_tag, DocumentFormat};

pub use extraction::{ExtractionResult, PdfExtractor};
pub use input::InputDocument;

/// Routes a document to the parser for its format.
///
/// Holds only configuration and the PDF backend; no state is carried from
/// one call to the next.
pub struct Extractor {
    config: ExtractorConfig,
    pdf: Box<dyn PdfExtractor>,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        let pdf: Box<dyn PdfExtractor> = match config.pdf.backend {
            PdfBackend::Lopdf => Box::new(LopdfExtractor::new()),
            PdfBackend::Pdftotext => {
                if !PdftotextExtractor::is_available() {
                    log::warn!("pdftotext backend selected but pdftotext is not installed");
                }
                Box::new(PdftotextExtractor::with_layout(config.pdf.layout))
            }
        };
        Extractor { config, pdf }
    }

    /// Replace the PDF backend chosen by the configuration.
    pub fn with_pdf_backend(mut self, pdf: Box<dyn PdfExtractor>) -> Self {
        self.pdf = pdf;
        self
    }

    /// Main API entry point: extract the text of one document.
    ///
    /// An absent document yields empty text. Every failure, including an
    /// unrecognized extension, comes back as a diagnostic.
    pub fn extract(&self, doc: Option<&mut InputDocument>) -> ExtractionResult {
        let Some(doc) = doc else {
            return ExtractionResult::text("");
        };

        let tag = format_tag(doc.name());
        let Some(format) = DocumentFormat::from_tag(&tag) else {
            log::warn!("unsupported file format '{}' for {}", tag, doc.name());
            return ExtractionResult::diagnostic(ExtractError::UnsupportedFormat(tag).to_string());
        };
        log::debug!("extracting {} as {}", doc.name(), format);

        match format {
            DocumentFormat::Pdf => extraction::pdf::extract_pdf(doc, self.pdf.as_ref()),
            DocumentFormat::Docx => extraction::docx::extract_docx(doc),
            DocumentFormat::Text => {
                extraction::text::extract_text(doc, &self.config.encodings.text)
            }
            DocumentFormat::Csv => {
                extraction::delimited::extract_csv(doc, &self.config.encodings.tabular)
            }
            DocumentFormat::Spreadsheet => extraction::spreadsheet::extract_spreadsheet(doc),
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

/// Extract one document with the default configuration.
pub fn extract(doc: Option<&mut InputDocument>) -> ExtractionResult {
    Extractor::default().extract(doc)
}
