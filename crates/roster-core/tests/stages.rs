//! Cross-stage tests: validate -> normalize -> placeholders.

use roster_core::{generate_placeholders, normalize, validate};
use roster_model::StudentTable;

fn uploaded_table() -> StudentTable {
    let mut table = StudentTable::new(vec![
        "GivenName".to_string(),
        "FamilyName".to_string(),
        "IdentifierCode".to_string(),
    ]);
    table.push_row(vec![
        "Müller".to_string(),
        "Schön".to_string(),
        "K1234".to_string(),
    ]);
    table.push_row(vec![
        "René".to_string(),
        "Nuñez".to_string(),
        "K5678".to_string(),
    ]);
    table
}

#[test]
fn validated_table_normalizes_both_name_columns() {
    let validated = validate(uploaded_table()).expect("schema valid");
    assert_eq!(validated.table().columns, vec!["GivenName", "FamilyName"]);

    let normalized = normalize(validated, "cls1");

    assert_eq!(normalized.table().rows[0], vec!["Mueller", "cls1_Schoen"]);
    assert_eq!(normalized.table().rows[1], vec!["Rene", "cls1_Nunez"]);
}

#[test]
fn validation_failure_reports_before_any_transform() {
    let table = StudentTable::new(vec!["GivenName".to_string()]);
    let error = validate(table).unwrap_err();
    assert!(matches!(
        error,
        roster_model::RosterError::MissingColumn(name) if name == "FamilyName"
    ));
}

#[test]
fn placeholder_batch_is_independent_of_the_table() {
    let batch = generate_placeholders("cls1");
    assert_eq!(batch.len(), 9);
    assert!(batch.rows().iter().all(|row| row.family_name == "cls1_user0"));
    let given: Vec<&str> = batch.rows().iter().map(|row| row.given_name.as_str()).collect();
    assert_eq!(given, vec!["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
}
