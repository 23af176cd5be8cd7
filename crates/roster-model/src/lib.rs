pub mod error;
pub mod schema;
pub mod table;

pub use error::{Result, RosterError};
pub use schema::{EXCLUDED_COLUMNS, FAMILY_NAME, GIVEN_NAME, REQUIRED_COLUMNS};
pub use table::StudentTable;
