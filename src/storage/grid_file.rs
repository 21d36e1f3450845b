//! Loading grid data from JSON files.

use super::Result;
use crate::core::grid::DataGrid;
use crate::error::StorageError;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Accepted file shapes, tried in order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GridDocument {
    /// `[[...], [...]]`
    Rows(Vec<Vec<Value>>),
    /// `{ "columns": [...], "rows": [[...]] }`
    Table {
        #[serde(default)]
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
    },
    /// A query-result export: `{ "data": { "cols": [...], "rows": [[...]] } }`
    QueryResult { data: QueryData },
}

#[derive(Debug, Deserialize)]
struct QueryData {
    #[serde(default)]
    cols: Vec<Column>,
    rows: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct Column {
    name: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl GridDocument {
    fn into_grid(self) -> DataGrid {
        match self {
            GridDocument::Rows(rows) => DataGrid::from_rows(rows),
            GridDocument::Table { columns, rows } => DataGrid::from_rows(rows).with_columns(columns),
            GridDocument::QueryResult { data } => {
                let columns = data
                    .cols
                    .into_iter()
                    .map(|col| col.display_name.unwrap_or(col.name))
                    .collect();
                DataGrid::from_rows(data.rows).with_columns(columns)
            }
        }
    }
}

/// Parse grid JSON from a string.
pub fn parse_grid(content: &str) -> std::result::Result<DataGrid, serde_json::Error> {
    serde_json::from_str::<GridDocument>(content).map(GridDocument::into_grid)
}

/// Load a grid file, appending `min_spare_rows` empty rows to its extent.
pub fn load_grid(path: &Path, min_spare_rows: usize) -> Result<DataGrid> {
    let content = fs::read_to_string(path).map_err(|source| StorageError::FileIo {
        path: path.to_string_lossy().to_string(),
        source,
    })?;

    let grid = parse_grid(&content).map_err(|e| StorageError::GridParse {
        path: path.to_string_lossy().to_string(),
        message: e.to_string(),
    })?;

    log::debug!(
        "Loaded {} rows from {}",
        grid.rows().len(),
        path.to_string_lossy()
    );
    Ok(grid.with_min_spare_rows(min_spare_rows))
}
