//! Placeholder account generation.
//!
//! The downstream enrollment system expects every export to end with a fixed
//! block of nine filler accounts in a rigid naming convention: a shared
//! surname of `<prefix>_user0` and given names `1` through `9`.

/// Number of placeholder rows appended to every export.
pub const PLACEHOLDER_ROW_COUNT: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderRow {
    pub given_name: String,
    pub family_name: String,
}

/// The fixed batch of filler accounts for one export.
#[derive(Debug, Clone)]
pub struct PlaceholderBatch {
    rows: Vec<PlaceholderRow>,
}

impl PlaceholderBatch {
    pub fn rows(&self) -> &[PlaceholderRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the placeholder batch for the given prefix.
///
/// The prefix is embedded as-is: unlike the row normalizer, this stage does
/// not transliterate, because the downstream system keys on the literal
/// placeholder convention.
pub fn generate_placeholders(prefix: &str) -> PlaceholderBatch {
    let family_name = format!("{prefix}_user0");
    let rows = (1..=PLACEHOLDER_ROW_COUNT)
        .map(|ordinal| PlaceholderRow {
            given_name: ordinal.to_string(),
            family_name: family_name.clone(),
        })
        .collect();
    PlaceholderBatch { rows }
}
