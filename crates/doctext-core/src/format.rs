use std::fmt;

/// Document formats the dispatcher knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
    Csv,
    Spreadsheet,
}

const EXTENSIONS: &[(&str, DocumentFormat)] = &[
    ("pdf", DocumentFormat::Pdf),
    ("docx", DocumentFormat::Docx),
    ("txt", DocumentFormat::Text),
    ("text", DocumentFormat::Text),
    ("csv", DocumentFormat::Csv),
    ("xlsx", DocumentFormat::Spreadsheet),
    ("xls", DocumentFormat::Spreadsheet),
];

impl DocumentFormat {
    pub fn from_tag(tag: &str) -> Option<DocumentFormat> {
        EXTENSIONS
            .iter()
            .find(|(ext, _)| *ext == tag)
            .map(|(_, format)| *format)
    }

    /// Extensions recognized by [`DocumentFormat::from_tag`], in dispatch order.
    pub fn supported_extensions() -> impl Iterator<Item = (&'static str, DocumentFormat)> {
        EXTENSIONS.iter().copied()
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "PDF"),
            DocumentFormat::Docx => write!(f, "DOCX"),
            DocumentFormat::Text => write!(f, "TXT"),
            DocumentFormat::Csv => write!(f, "CSV"),
            DocumentFormat::Spreadsheet => write!(f, "Excel"),
        }
    }
}

/// Lower-cased text after the last `.` of a file name.
///
/// A name without any `.` is its own tag; a trailing `.` gives an empty tag.
pub fn format_tag(name: &str) -> String {
    let lower = name.to_lowercase();
    match lower.rsplit_once('.') {
        Some((_, ext)) => ext.to_string(),
        None => lower,
    }
}
