//! Raw row handling shared by the CSV and XLSX readers.

use roster_model::{Result, RosterError, StudentTable};

/// Normalize a header label: strip a UTF-8 BOM, trim, collapse inner runs of
/// whitespace to single spaces.
pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

pub(crate) fn is_empty_row(row: &[String]) -> bool {
    row.iter().all(|value| value.trim().is_empty())
}

/// Build a [`StudentTable`] from raw rows: the first row declares the column
/// labels, every following row is padded or truncated to the header width.
///
/// Fully empty rows must already be filtered out by the caller.
pub(crate) fn table_from_rows(raw_rows: Vec<Vec<String>>) -> Result<StudentTable> {
    let mut iter = raw_rows.into_iter();
    let Some(header_row) = iter.next() else {
        return Err(RosterError::Parse("table has no header row".to_string()));
    };
    let columns: Vec<String> = header_row.iter().map(|value| normalize_header(value)).collect();

    let mut table = StudentTable::new(columns);
    for record in iter {
        let mut row = Vec::with_capacity(table.column_count());
        for idx in 0..table.column_count() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(normalize_cell(value));
        }
        table.push_row(row);
    }
    Ok(table)
}
