//! Username normalization over the two name columns.
//!
//! FamilyName becomes `<prefix>_<family>` and is then transliterated, so
//! diacritics inside the prefix are normalized along with the surname.
//! GivenName is transliterated without a prefix. All other columns pass
//! through untouched.

use tracing::debug;

use crate::transliterate::transliterate;
use crate::validate::ValidatedTable;

/// A validated table whose name columns carry derived usernames.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    table: roster_model::StudentTable,
    given_index: usize,
    family_index: usize,
}

impl NormalizedTable {
    pub fn table(&self) -> &roster_model::StudentTable {
        &self.table
    }

    pub fn given_index(&self) -> usize {
        self.given_index
    }

    pub fn family_index(&self) -> usize {
        self.family_index
    }
}

/// Rewrite the name columns of every row.
///
/// The prefix is used verbatim; trimming and non-emptiness are the
/// orchestrator's responsibility.
pub fn normalize(validated: ValidatedTable, prefix: &str) -> NormalizedTable {
    let (mut table, given_index, family_index) = validated.into_parts();
    for row in &mut table.rows {
        let family = std::mem::take(&mut row[family_index]);
        row[family_index] = transliterate(&format!("{prefix}_{family}"));
        let given = std::mem::take(&mut row[given_index]);
        row[given_index] = transliterate(&given);
    }
    debug!(row_count = table.row_count(), "name columns normalized");
    NormalizedTable {
        table,
        given_index,
        family_index,
    }
}
