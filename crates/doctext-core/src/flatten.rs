use crate::table::Table;

/// Decoration applied around the shared row rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderProfile {
    /// Delimited-text tables.
    Csv,
    /// One worksheet of a workbook.
    Sheet,
}

const RULE_WIDTH: usize = 50;

impl RenderProfile {
    fn header_prefix(&self) -> &'static str {
        match self {
            RenderProfile::Csv => "Column Headers: ",
            RenderProfile::Sheet => "Columns: ",
        }
    }

    fn rule(&self) -> String {
        match self {
            RenderProfile::Csv => format!("\n{}\n", "=".repeat(RULE_WIDTH)),
            RenderProfile::Sheet => "-".repeat(RULE_WIDTH),
        }
    }
}

/// Render a table as line-oriented text.
///
/// Blank cells are dropped, rows left with nothing are omitted, and each
/// surviving row keeps its 1-based position from the source.
pub fn flatten(table: &Table, profile: RenderProfile) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 2);
    lines.push(format!(
        "{}{}",
        profile.header_prefix(),
        table.columns.join(", ")
    ));
    lines.push(profile.rule());

    for index in 0..table.rows.len() {
        if let Some(line) = render_row(table, index) {
            lines.push(format!("Row {}: {}", index + 1, line));
        }
    }

    lines.join("\n")
}

fn render_row(table: &Table, index: usize) -> Option<String> {
    let pairs: Vec<String> = table
        .columns
        .iter()
        .enumerate()
        .filter_map(|(col, name)| {
            let cell = table.cell(index, col);
            if cell.is_blank() {
                None
            } else {
                Some(format!("{name}: {cell}"))
            }
        })
        .collect();

    if pairs.is_empty() {
        None
    } else {
        Some(pairs.join(" | "))
    }
}
