//! Preview rendering for the normalized roster.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use roster_core::NormalizedTable;

/// Render the first `limit` normalized rows as a terminal table.
pub fn render_preview(normalized: &NormalizedTable, limit: usize) -> Table {
    let data = normalized.table();
    let mut table = Table::new();
    table.set_header(
        data.columns
            .iter()
            .map(|label| header_cell(label))
            .collect::<Vec<_>>(),
    );
    apply_preview_style(&mut table);
    for row in data.rows.iter().take(limit) {
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }
    table
}

/// Rows not shown by a preview with the given limit.
pub fn hidden_row_count(normalized: &NormalizedTable, limit: usize) -> usize {
    normalized.table().row_count().saturating_sub(limit)
}

fn apply_preview_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
