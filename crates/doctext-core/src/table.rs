use std::collections::HashMap;
use std::fmt;

/// A single cell of a tabular source.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Date/time in the display form produced by the source library.
    DateTime(String),
    /// Spreadsheet error token such as `#DIV/0!`.
    Error(String),
}

impl CellValue {
    /// True for cells that carry nothing worth rendering: no value, an empty
    /// rendering, or the `nan` sentinel in any letter case.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Float(f) if f.is_nan() => true,
            other => {
                let rendered = other.to_string();
                rendered.is_empty() || rendered.eq_ignore_ascii_case("nan")
            }
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) | CellValue::DateTime(s) | CellValue::Error(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) if v.is_nan() => f.write_str("nan"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Named columns and the rows beneath them, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Table { columns, rows }
    }

    /// Cell at `(row, column)`; cells past the end of a short row are empty.
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&EMPTY_CELL)
    }
}

/// Turn raw header cells into unique column names.
///
/// Empty headers become `Unnamed: <index>`; whitespace is kept as written.
/// Repeated names get `.1`, `.2`, ... appended, skipping any suffix that is
/// already taken.
pub fn normalize_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut columns: Vec<String> = raw
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let name = name.as_ref();
            if name.is_empty() {
                format!("Unnamed: {i}")
            } else {
                name.to_string()
            }
        })
        .collect();

    let mut seen: HashMap<String, usize> = HashMap::new();
    for i in 0..columns.len() {
        let base = columns[i].clone();
        let count = seen.entry(base.clone()).or_insert(0);
        if *count > 0 {
            let mut suffix = *count;
            let mut candidate = format!("{base}.{suffix}");
            while columns[..i].contains(&candidate) || columns[i + 1..].contains(&candidate) {
                suffix += 1;
                candidate = format!("{base}.{suffix}");
            }
            *count = suffix + 1;
            columns[i] = candidate;
        } else {
            *count = 1;
        }
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cells() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::Text(String::new()).is_blank());
        assert!(CellValue::Text("nan".into()).is_blank());
        assert!(CellValue::Text("NaN".into()).is_blank());
        assert!(CellValue::Float(f64::NAN).is_blank());
        assert!(!CellValue::Text(" ".into()).is_blank());
        assert!(!CellValue::Text("nano".into()).is_blank());
        assert!(!CellValue::Int(0).is_blank());
        assert!(!CellValue::Bool(false).is_blank());
    }

    #[test]
    fn rendering() {
        assert_eq!(CellValue::Int(30).to_string(), "30");
        assert_eq!(CellValue::Float(30.0).to_string(), "30");
        assert_eq!(CellValue::Float(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Bool(true).to_string(), "True");
        assert_eq!(CellValue::Error("#DIV/0!".into()).to_string(), "#DIV/0!");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn short_rows_read_as_empty() {
        let table = Table::new(
            vec!["a".into(), "b".into()],
            vec![vec![CellValue::Int(1)]],
        );
        assert_eq!(table.cell(0, 0), &CellValue::Int(1));
        assert_eq!(table.cell(0, 1), &CellValue::Empty);
        assert_eq!(table.cell(5, 0), &CellValue::Empty);
    }

    #[test]
    fn unnamed_headers_use_position() {
        assert_eq!(
            normalize_headers(["id", "", " ", " name "]),
            vec!["id", "Unnamed: 1", " ", " name "]
        );
    }

    #[test]
    fn duplicate_headers_get_suffixes() {
        assert_eq!(
            normalize_headers(["a", "b", "a", "a"]),
            vec!["a", "b", "a.1", "a.2"]
        );
    }

    #[test]
    fn duplicate_suffix_skips_existing_name() {
        assert_eq!(normalize_headers(["a", "a", "a.1"]), vec!["a", "a.2", "a.1"]);
    }
}
