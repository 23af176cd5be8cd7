//! XLSX ingestion.
//!
//! Only the first worksheet is read; the first row declares the column
//! labels. Every cell is rendered as text, matching how the downstream
//! export treats all fields.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, DataType, Reader, Xlsx, open_workbook};
use tracing::debug;

use roster_model::{Result, RosterError, StudentTable};

use crate::rows::{is_empty_row, table_from_rows};

pub fn read_xlsx_bytes(bytes: &[u8]) -> Result<StudentTable> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))
        .map_err(|error| RosterError::Parse(format!("failed to open workbook: {error}")))?;
    table_from_workbook(&mut workbook)
}

pub fn read_xlsx_table(path: &Path) -> Result<StudentTable> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|error| RosterError::Parse(format!("failed to open workbook: {error}")))?;
    table_from_workbook(&mut workbook)
}

fn table_from_workbook<RS: Read + Seek>(workbook: &mut Xlsx<RS>) -> Result<StudentTable> {
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| RosterError::Parse("workbook has no worksheets".to_string()))?
        .map_err(|error| RosterError::Parse(format!("failed to read worksheet: {error}")))?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for row in range.rows() {
        let row: Vec<String> = row.iter().map(render_cell).collect();
        if is_empty_row(&row) {
            continue;
        }
        raw_rows.push(row);
    }
    let table = table_from_rows(raw_rows)?;
    debug!(
        column_count = table.column_count(),
        row_count = table.row_count(),
        "xlsx table read"
    );
    Ok(table)
}

fn render_cell(cell: &Data) -> String {
    cell.as_string()
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| format!("{cell}").trim().to_string())
}
