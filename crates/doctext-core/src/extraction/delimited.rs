use crate::encoding::{decode_stream, TextEncoding};
use crate::error::ExtractError;
use crate::extraction::{finish, ExtractionResult};
use crate::flatten::{flatten, RenderProfile};
use crate::input::InputDocument;
use crate::table::{normalize_headers, CellValue, Table};

const NO_ENCODING: &str = "Error: Could not read CSV file with any encoding";

/// Read a comma-separated table and flatten it with the CSV profile.
pub fn extract_csv(doc: &mut InputDocument, candidates: &[TextEncoding]) -> ExtractionResult {
    let decoded = match decode_stream(doc, candidates) {
        Ok(decoded) => decoded,
        Err(ExtractError::DecodeExhausted { tried }) => {
            log::warn!("no CSV encoding candidate worked (tried {})", tried.join(", "));
            return ExtractionResult::diagnostic(NO_ENCODING);
        }
        Err(e) => return finish(Err(e), "Error reading CSV"),
    };

    log::debug!("parsing CSV decoded as {}", decoded.encoding);
    let outcome = parse_table(&decoded.text).map(|table| flatten(&table, RenderProfile::Csv));
    finish(outcome, "Error reading CSV")
}

/// Parse delimited text into a table, taking the first record as the header.
pub fn parse_table(text: &str) -> Result<Table, ExtractError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(ExtractError::Malformed(
            "No columns to parse from file".into(),
        ));
    }
    let columns = normalize_headers(headers.iter());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > columns.len() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(ExtractError::Malformed(format!(
                "Expected {} fields in line {}, saw {}",
                columns.len(),
                line,
                record.len()
            )));
        }
        rows.push(record.iter().map(CellValue::from).collect());
    }

    Ok(Table::new(columns, rows))
}
