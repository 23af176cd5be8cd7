//! File-based ingestion tests.

use std::io::Write;

use roster_ingest::{read_csv_table, read_table_bytes};

#[test]
fn reads_csv_file_from_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("students.csv");
    let mut file = std::fs::File::create(&path).expect("create csv");
    write!(
        file,
        "GivenName,FamilyName,EnrollmentStatus\nAda,Lovelace,active\nGrace,Hopper,active\n"
    )
    .expect("write csv");

    let table = read_csv_table(&path).expect("read csv table");

    assert_eq!(
        table.columns,
        vec!["GivenName", "FamilyName", "EnrollmentStatus"]
    );
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[0], vec!["Ada", "Lovelace", "active"]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("does-not-exist.csv");

    let error = read_csv_table(&path).unwrap_err();

    assert!(matches!(error, roster_model::RosterError::Io(_)));
}

#[test]
fn byte_entry_point_handles_csv_uploads() {
    let table = read_table_bytes(b"GivenName,FamilyName\nAda,Lovelace\n").expect("read bytes");
    assert_eq!(table.row_count(), 1);
}

#[test]
fn byte_entry_point_rejects_truncated_zip_uploads() {
    // ZIP magic without a real workbook behind it.
    let error = read_table_bytes(b"PK\x03\x04garbage").unwrap_err();
    assert!(matches!(error, roster_model::RosterError::Parse(_)));
}
