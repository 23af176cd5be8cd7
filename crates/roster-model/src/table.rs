#![deny(unsafe_code)]

/// A single flat sheet of labeled columns.
///
/// Rows are positional: `rows[r][c]` belongs to `columns[c]`. Ingestion pads
/// short records, so every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StudentTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl StudentTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Index of a column by its exact label.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == label)
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Remove the columns at the given indices, keeping the remaining order.
    ///
    /// Indices outside the column range are ignored.
    pub fn drop_columns(&mut self, indices: &[usize]) {
        if indices.is_empty() {
            return;
        }
        let keep: Vec<bool> = (0..self.columns.len())
            .map(|idx| !indices.contains(&idx))
            .collect();
        retain_by_index(&mut self.columns, &keep);
        for row in &mut self.rows {
            retain_by_index(row, &keep);
        }
    }
}

fn retain_by_index(values: &mut Vec<String>, keep: &[bool]) {
    let mut idx = 0;
    values.retain(|_| {
        let kept = keep.get(idx).copied().unwrap_or(true);
        idx += 1;
        kept
    });
}
