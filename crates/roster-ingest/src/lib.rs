pub mod csv_table;
pub mod format;
mod rows;
pub mod xlsx_table;

pub use csv_table::{read_csv_bytes, read_csv_table};
pub use format::{TableFormat, detect_format, read_table_bytes};
pub use xlsx_table::{read_xlsx_bytes, read_xlsx_table};
