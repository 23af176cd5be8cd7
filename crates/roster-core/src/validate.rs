//! Schema validation.
//!
//! Required-column presence is confirmed before anything is mutated; only a
//! table that passed that check has its excluded columns dropped. The result
//! is wrapped in [`ValidatedTable`] so later stages cannot run on unchecked
//! input.

use tracing::debug;

use roster_model::{
    EXCLUDED_COLUMNS, FAMILY_NAME, GIVEN_NAME, REQUIRED_COLUMNS, Result, RosterError, StudentTable,
};

/// A table whose required columns are present and whose excluded columns
/// have been dropped.
#[derive(Debug, Clone)]
pub struct ValidatedTable {
    table: StudentTable,
    given_index: usize,
    family_index: usize,
}

impl ValidatedTable {
    pub fn table(&self) -> &StudentTable {
        &self.table
    }

    pub fn given_index(&self) -> usize {
        self.given_index
    }

    pub fn family_index(&self) -> usize {
        self.family_index
    }

    pub(crate) fn into_parts(self) -> (StudentTable, usize, usize) {
        (self.table, self.given_index, self.family_index)
    }
}

/// Validate the uploaded table against the roster schema.
///
/// Fails with [`RosterError::MissingColumn`] naming the first absent
/// required column; the input is not touched on failure.
pub fn validate(mut table: StudentTable) -> Result<ValidatedTable> {
    for required in REQUIRED_COLUMNS {
        if table.column_index(required).is_none() {
            return Err(RosterError::MissingColumn(required.to_string()));
        }
    }

    let drop_indices: Vec<usize> = EXCLUDED_COLUMNS
        .iter()
        .filter_map(|label| table.column_index(label))
        .collect();
    if !drop_indices.is_empty() {
        debug!(dropped = drop_indices.len(), "excluded columns removed");
        table.drop_columns(&drop_indices);
    }

    // Indices are recomputed after the drop; both lookups were verified above
    // and the required columns are never in the excluded set.
    let given_index = table
        .column_index(GIVEN_NAME)
        .ok_or_else(|| RosterError::MissingColumn(GIVEN_NAME.to_string()))?;
    let family_index = table
        .column_index(FAMILY_NAME)
        .ok_or_else(|| RosterError::MissingColumn(FAMILY_NAME.to_string()))?;

    Ok(ValidatedTable {
        table,
        given_index,
        family_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: &[&[&str]]) -> StudentTable {
        let mut table = StudentTable::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            table.push_row(row.iter().map(|c| c.to_string()).collect());
        }
        table
    }

    #[test]
    fn passes_with_both_required_columns() {
        let validated = validate(table(
            &["GivenName", "FamilyName"],
            &[&["Ada", "Lovelace"]],
        ))
        .unwrap();
        assert_eq!(validated.given_index(), 0);
        assert_eq!(validated.family_index(), 1);
        assert_eq!(validated.table().row_count(), 1);
    }

    #[test]
    fn missing_family_name_is_named_in_the_error() {
        let error = validate(table(&["GivenName"], &[])).unwrap_err();
        assert_eq!(
            error.to_string(),
            "required column 'FamilyName' not found in the uploaded table"
        );
    }

    #[test]
    fn missing_given_name_is_named_in_the_error() {
        let error = validate(table(&["FamilyName"], &[])).unwrap_err();
        assert!(matches!(error, RosterError::MissingColumn(name) if name == "GivenName"));
    }

    #[test]
    fn excluded_columns_are_dropped() {
        let validated = validate(table(
            &[
                "IdentifierCode",
                "GivenName",
                "EnrollmentStatus",
                "FamilyName",
                "TeachingOrg",
                "Cohort",
            ],
            &[&["X1", "Ada", "active", "Lovelace", "Math", "2031"]],
        ))
        .unwrap();
        assert_eq!(
            validated.table().columns,
            vec!["GivenName", "FamilyName", "Cohort"]
        );
        assert_eq!(validated.table().rows[0], vec!["Ada", "Lovelace", "2031"]);
        assert_eq!(validated.given_index(), 0);
        assert_eq!(validated.family_index(), 1);
    }

    #[test]
    fn absent_excluded_columns_are_not_an_error() {
        let validated = validate(table(
            &["GivenName", "FamilyName", "Cohort"],
            &[&["Ada", "Lovelace", "2031"]],
        ))
        .unwrap();
        assert_eq!(validated.table().column_count(), 3);
    }
}
