use std::io::Cursor;

use calamine::{Data, ExcelDateTime, Range, Reader};

use crate::error::ExtractError;
use crate::extraction::{finish, ExtractionResult};
use crate::flatten::{flatten, RenderProfile};
use crate::input::InputDocument;
use crate::table::{normalize_headers, CellValue, Table};

const BANNER: &str = "====================";

/// Read every sheet of a workbook (xlsx, xls, xlsb or ods) and flatten each
/// one with the sheet profile.
pub fn extract_spreadsheet(doc: &mut InputDocument) -> ExtractionResult {
    let outcome = doc
        .read_all()
        .map_err(ExtractError::from)
        .and_then(|bytes| read_workbook(&bytes))
        .map(|sheets| render_workbook(&sheets));
    finish(outcome, "Error reading Excel")
}

/// Open a workbook and return its sheets as tables, in workbook order.
pub fn read_workbook(bytes: &[u8]) -> Result<Vec<(String, Table)>, ExtractError> {
    let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name)?;
        log::debug!("sheet '{}' spans {:?}", name, range.get_size());
        sheets.push((name, table_from_range(&range)));
    }
    Ok(sheets)
}

/// Concatenate per-sheet headings and flattened tables.
pub fn render_workbook(sheets: &[(String, Table)]) -> String {
    let mut parts = Vec::with_capacity(sheets.len() * 3);
    for (name, table) in sheets {
        parts.push(format!("\n{BANNER} SHEET: {name} {BANNER}"));
        parts.push(flatten(table, RenderProfile::Sheet));
        parts.push(String::new());
    }
    parts.join("\n")
}

/// First row of the used range is the header; the rest are data rows.
fn table_from_range(range: &Range<Data>) -> Table {
    let mut rows = range.rows();
    let columns = match rows.next() {
        Some(header) => normalize_headers(header.iter().map(header_text)),
        None => return Table::default(),
    };
    let rows = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();
    Table::new(columns, rows)
}

fn header_text(cell: &Data) -> String {
    cell_value(cell).to_string()
}

/// Calendar form of a date cell; serials outside the calendar (durations,
/// out-of-range values) keep their numeric form.
fn date_time_text(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return dt.to_string();
    }
    match dt.as_datetime() {
        Some(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => dt.to_string(),
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::from(s.as_str()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::DateTime(date_time_text(dt)),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::DateTime(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}
