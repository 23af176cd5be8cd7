//! Core pipeline stages for the username roster generator.

pub mod normalize;
pub mod placeholder;
pub mod transliterate;
pub mod validate;

pub use normalize::{NormalizedTable, normalize};
pub use placeholder::{PLACEHOLDER_ROW_COUNT, PlaceholderBatch, PlaceholderRow, generate_placeholders};
pub use transliterate::{diacritic_mappings, transliterate};
pub use validate::{ValidatedTable, validate};
