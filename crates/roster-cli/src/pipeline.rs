//! The orchestrating pipeline with explicit stages.
//!
//! Stages run in order:
//! 1. **Ingest**: parse the uploaded table bytes (CSV or XLSX)
//! 2. **Validate**: confirm required columns, drop excluded columns
//! 3. **Normalize**: prefix and transliterate the name columns
//! 4. **Placeholders**: build the fixed filler batch from the prefix
//! 5. **Assemble**: serialize the headerless semicolon-delimited export
//!
//! A failed stage is terminal for the run: no retry, no partial export.

use std::time::Instant;

use tracing::{debug, info, info_span};

use roster_core::{
    NormalizedTable, PlaceholderBatch, generate_placeholders, normalize, validate,
};
use roster_export::{ExportArtifact, assemble};
use roster_ingest::read_table_bytes;
use roster_model::{Result, RosterError};

/// Everything a caller needs after a successful run: the normalized table
/// for preview rendering, the placeholder batch, and the export artifact.
#[derive(Debug)]
pub struct PipelineResult {
    pub normalized: NormalizedTable,
    pub placeholders: PlaceholderBatch,
    pub artifact: ExportArtifact,
    /// Number of real data rows read from the upload.
    pub input_rows: usize,
}

/// Run the full pipeline over raw uploaded table bytes.
///
/// The prefix is trimmed here; an empty or whitespace-only prefix is
/// refused with [`RosterError::EmptyPrefix`] before any parsing happens.
pub fn run_pipeline(table_bytes: &[u8], prefix: &str) -> Result<PipelineResult> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return Err(RosterError::EmptyPrefix);
    }

    let run_span = info_span!("run_pipeline", prefix = %prefix);
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let table = info_span!("ingest").in_scope(|| {
        let start = Instant::now();
        let table = read_table_bytes(table_bytes)?;
        debug!(
            row_count = table.row_count(),
            column_count = table.column_count(),
            duration_ms = start.elapsed().as_millis(),
            "ingest complete"
        );
        Ok::<_, RosterError>(table)
    })?;
    let input_rows = table.row_count();

    let validated = info_span!("validate").in_scope(|| validate(table))?;
    let normalized = info_span!("normalize").in_scope(|| normalize(validated, prefix));
    let placeholders = generate_placeholders(prefix);
    let artifact = info_span!("assemble").in_scope(|| assemble(&normalized, &placeholders))?;

    info!(
        input_rows,
        placeholder_rows = placeholders.len(),
        export_bytes = artifact.bytes.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "pipeline complete"
    );

    Ok(PipelineResult {
        normalized,
        placeholders,
        artifact,
        input_rows,
    })
}
