//! Export assembly.
//!
//! Serializes the normalized roster followed by the placeholder batch as a
//! headerless, semicolon-delimited text blob, one record per line. The
//! downstream enrollment system consumes positional fields only, so the
//! record layout is exactly the validated table's column order; placeholder
//! rows fill the two name columns and leave every other field empty.

use csv::WriterBuilder;
use tracing::debug;

use roster_core::{NormalizedTable, PlaceholderBatch};
use roster_model::{Result, RosterError};

/// File name the download collaborator attaches to the artifact.
pub const EXPORT_FILE_NAME: &str = "usernamen.csv";

/// MIME type the download collaborator tags the artifact with.
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// Field separator of the export format.
pub const EXPORT_DELIMITER: u8 = b';';

/// A finished export: the serialized bytes plus delivery metadata.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub file_name: &'static str,
    pub mime_type: &'static str,
}

/// Serialize normalized rows followed by placeholder rows.
///
/// Rows are written in order, never filtered or deduplicated; real rows
/// always precede the placeholder block.
pub fn assemble(
    normalized: &NormalizedTable,
    placeholders: &PlaceholderBatch,
) -> Result<ExportArtifact> {
    let table = normalized.table();
    let mut writer = WriterBuilder::new()
        .delimiter(EXPORT_DELIMITER)
        .from_writer(Vec::new());

    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|error| RosterError::Export(error.to_string()))?;
    }

    for placeholder in placeholders.rows() {
        let mut record = vec![String::new(); table.column_count()];
        record[normalized.given_index()] = placeholder.given_name.clone();
        record[normalized.family_index()] = placeholder.family_name.clone();
        writer
            .write_record(&record)
            .map_err(|error| RosterError::Export(error.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| RosterError::Export(error.to_string()))?;
    debug!(
        real_rows = table.row_count(),
        placeholder_rows = placeholders.len(),
        byte_count = bytes.len(),
        "export assembled"
    );
    Ok(ExportArtifact {
        bytes,
        file_name: EXPORT_FILE_NAME,
        mime_type: EXPORT_MIME_TYPE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{generate_placeholders, normalize, validate};
    use roster_model::StudentTable;

    fn normalized(columns: &[&str], rows: &[&[&str]], prefix: &str) -> NormalizedTable {
        let mut table = StudentTable::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            table.push_row(row.iter().map(|c| c.to_string()).collect());
        }
        normalize(validate(table).expect("schema valid"), prefix)
    }

    #[test]
    fn export_is_headerless_with_real_rows_first() {
        let normalized = normalized(
            &["GivenName", "FamilyName"],
            &[&["Müller", "Schön"]],
            "cls1",
        );
        let artifact = assemble(&normalized, &generate_placeholders("cls1")).unwrap();
        let text = String::from_utf8(artifact.bytes).unwrap();
        insta::assert_snapshot!(text, @r"
        Mueller;cls1_Schoen
        1;cls1_user0
        2;cls1_user0
        3;cls1_user0
        4;cls1_user0
        5;cls1_user0
        6;cls1_user0
        7;cls1_user0
        8;cls1_user0
        9;cls1_user0
        ");
    }

    #[test]
    fn placeholder_rows_leave_passthrough_columns_empty() {
        let normalized = normalized(
            &["Cohort", "GivenName", "FamilyName"],
            &[&["2031", "Ada", "Lovelace"]],
            "cls1",
        );
        let artifact = assemble(&normalized, &generate_placeholders("cls1")).unwrap();
        let text = String::from_utf8(artifact.bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2031;Ada;cls1_Lovelace");
        assert_eq!(lines[1], ";1;cls1_user0");
        assert_eq!(lines[9], ";9;cls1_user0");
    }

    #[test]
    fn zero_real_rows_still_export_the_nine_placeholders() {
        let normalized = normalized(&["GivenName", "FamilyName"], &[], "cls1");
        let artifact = assemble(&normalized, &generate_placeholders("cls1")).unwrap();
        let text = String::from_utf8(artifact.bytes).unwrap();
        assert_eq!(text.lines().count(), 9);
        assert_eq!(text.lines().next(), Some("1;cls1_user0"));
    }

    #[test]
    fn fields_containing_the_delimiter_are_quoted() {
        let normalized = normalized(
            &["GivenName", "FamilyName"],
            &[&["Ada;Beth", "Lovelace"]],
            "cls1",
        );
        let artifact = assemble(&normalized, &generate_placeholders("cls1")).unwrap();
        let text = String::from_utf8(artifact.bytes).unwrap();
        assert_eq!(text.lines().next(), Some("\"Ada;Beth\";cls1_Lovelace"));
    }

    #[test]
    fn artifact_carries_delivery_metadata() {
        let normalized = normalized(&["GivenName", "FamilyName"], &[], "cls1");
        let artifact = assemble(&normalized, &generate_placeholders("cls1")).unwrap();
        assert_eq!(artifact.file_name, "usernamen.csv");
        assert_eq!(artifact.mime_type, "text/csv");
    }
}
