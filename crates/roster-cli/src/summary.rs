//! Run summary printed after a generate run.

use std::path::PathBuf;

#[derive(Debug)]
pub struct RunSummary {
    pub input: PathBuf,
    pub input_rows: usize,
    pub placeholder_rows: usize,
    pub export_bytes: usize,
    /// `None` when the run was a dry run and nothing was written.
    pub output: Option<PathBuf>,
}

pub fn print_summary(summary: &RunSummary) {
    println!(
        "Input: {} ({} rows)",
        summary.input.display(),
        summary.input_rows
    );
    println!("Placeholders: {} rows", summary.placeholder_rows);
    match &summary.output {
        Some(path) => println!(
            "Export: {} ({} bytes)",
            path.display(),
            summary.export_bytes
        ),
        None => println!("Export: skipped (dry run)"),
    }
}
