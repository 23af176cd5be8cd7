//! Command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, ContentArrangement, Table};

use roster_cli::pipeline::run_pipeline;
use roster_cli::preview::{hidden_row_count, render_preview};
use roster_cli::summary::{RunSummary, print_summary};
use roster_core::diacritic_mappings;

use crate::cli::GenerateArgs;

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let result = run_pipeline(&bytes, &args.prefix)?;

    if !args.no_preview {
        println!("{}", render_preview(&result.normalized, args.preview_rows));
        let hidden = hidden_row_count(&result.normalized, args.preview_rows);
        if hidden > 0 {
            println!("({hidden} more rows not shown)");
        }
    }

    let output = if args.dry_run {
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(result.artifact.file_name));
        std::fs::write(&path, &result.artifact.bytes)
            .with_context(|| format!("write {}", path.display()))?;
        Some(path)
    };

    print_summary(&RunSummary {
        input: args.input.clone(),
        input_rows: result.input_rows,
        placeholder_rows: result.placeholders.len(),
        export_bytes: result.artifact.bytes.len(),
        output,
    });
    Ok(())
}

pub fn run_mappings() {
    let mut table = Table::new();
    table.set_header(vec![Cell::new("Character"), Cell::new("Replacement")]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for (source, replacement) in diacritic_mappings() {
        table.add_row(vec![Cell::new(source), Cell::new(replacement)]);
    }
    println!("{table}");
}
