//! Grid data sources.
//!
//! The search core reads cells through [`GridSource`] so it never depends on
//! how the host stores its rows. [`DataGrid`] is the owned implementation used
//! by the CLI and tests.

use crate::error::GridError;
use serde_json::Value;

static EMPTY_CELL: Value = Value::Null;

/// Read access to a rectangular grid of cell values.
pub trait GridSource {
    /// Number of rows in the logical extent, spare rows included.
    fn row_count(&self) -> usize;

    /// Number of columns in the logical extent.
    fn col_count(&self) -> usize;

    /// Current value of a cell. Empty cells inside the extent read as `null`.
    fn cell_value(&self, row: usize, col: usize) -> Result<&Value, GridError>;
}

/// Owned grid data with optional headers and trailing spare rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataGrid {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    min_spare_rows: usize,
    /// Widest stored row, kept current so reads never rescan the rows.
    widest_row: usize,
}

impl DataGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<Value>>) -> Self {
        let widest_row = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            columns: Vec::new(),
            rows,
            min_spare_rows: 0,
            widest_row,
        }
    }

    /// Spreadsheet-style sample data: cell (row, col) holds e.g. `"B3"`.
    pub fn sample(rows: usize, cols: usize) -> Self {
        let data = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| Value::String(format!("{}{}", column_label(col), row + 1)))
                    .collect()
            })
            .collect();
        Self::from_rows(data)
    }

    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }

    /// Keep this many structurally empty rows after the data.
    pub fn with_min_spare_rows(mut self, spare: usize) -> Self {
        self.min_spare_rows = spare;
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Header for a column: the configured name, or a spreadsheet label.
    pub fn column_name(&self, col: usize) -> String {
        self.columns
            .get(col)
            .cloned()
            .unwrap_or_else(|| column_label(col))
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn min_spare_rows(&self) -> usize {
        self.min_spare_rows
    }

    /// Write a cell, growing the stored rows as needed.
    pub fn set_cell(&mut self, row: usize, col: usize, value: Value) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, Value::Null);
        }
        cells[col] = value;
        self.widest_row = self.widest_row.max(col + 1);
    }
}

impl GridSource for DataGrid {
    fn row_count(&self) -> usize {
        self.rows.len() + self.min_spare_rows
    }

    fn col_count(&self) -> usize {
        self.widest_row.max(self.columns.len())
    }

    fn cell_value(&self, row: usize, col: usize) -> Result<&Value, GridError> {
        let (rows, cols) = (self.row_count(), self.col_count());
        if row >= rows || col >= cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            });
        }
        Ok(self
            .rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&EMPTY_CELL))
    }
}

impl GridSource for Vec<Vec<Value>> {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn col_count(&self) -> usize {
        self.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn cell_value(&self, row: usize, col: usize) -> Result<&Value, GridError> {
        if let Some(value) = self.get(row).and_then(|cells| cells.get(col)) {
            return Ok(value);
        }
        // Only ragged or out-of-range reads pay for measuring the width
        let (rows, cols) = (self.row_count(), self.col_count());
        if row >= rows || col >= cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            });
        }
        Ok(&EMPTY_CELL)
    }
}

/// Spreadsheet column label: 0 → "A", 25 → "Z", 26 → "AA".
pub fn column_label(col: usize) -> String {
    let mut label = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}
