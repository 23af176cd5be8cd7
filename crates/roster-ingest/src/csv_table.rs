//! CSV ingestion.
//!
//! Reads a single flat sheet: the first non-empty record declares the column
//! labels, everything after it is data. Fully empty records are skipped.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use roster_model::{Result, RosterError, StudentTable};

use crate::rows::{is_empty_row, normalize_cell, table_from_rows};

pub fn read_csv_bytes(bytes: &[u8]) -> Result<StudentTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| RosterError::Parse(error.to_string()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if is_empty_row(&row) {
            continue;
        }
        raw_rows.push(row);
    }
    let table = table_from_rows(raw_rows)?;
    debug!(
        column_count = table.column_count(),
        row_count = table.row_count(),
        "csv table read"
    );
    Ok(table)
}

pub fn read_csv_table(path: &Path) -> Result<StudentTable> {
    let bytes = std::fs::read(path)?;
    read_csv_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_header_and_rows() {
        let table = read_csv_bytes(b"GivenName,FamilyName\nAda,Lovelace\nGrace,Hopper\n").unwrap();
        assert_eq!(table.columns, vec!["GivenName", "FamilyName"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["Grace", "Hopper"]);
    }

    #[test]
    fn strips_bom_from_first_header() {
        let table = read_csv_bytes("\u{feff}GivenName,FamilyName\nAda,Lovelace\n".as_bytes())
            .unwrap();
        assert_eq!(table.columns[0], "GivenName");
    }

    #[test]
    fn skips_fully_empty_records() {
        let table = read_csv_bytes(b"GivenName,FamilyName\n,\nAda,Lovelace\n\n").unwrap();
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        let error = read_csv_bytes(b"").unwrap_err();
        assert!(matches!(error, RosterError::Parse(_)));
    }

    #[test]
    fn cells_are_trimmed() {
        let table = read_csv_bytes(b"GivenName,FamilyName\n Ada , Lovelace \n").unwrap();
        assert_eq!(table.rows[0], vec!["Ada", "Lovelace"]);
    }
}
