//! Row-major scan of a grid with a resolved query method and callback.

use super::callback::{ResultCallback, SearchOwner};
use super::grid::GridSource;
use super::method::QueryMethod;
use super::state::{MatchState, SearchResult};
use crate::error::SearchError;
use serde_json::Value;

/// Counts from one completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub visited: usize,
    pub matched: usize,
}

pub struct MatchEngine<'a> {
    query_method: &'a dyn QueryMethod,
    callback: &'a dyn ResultCallback,
}

impl<'a> MatchEngine<'a> {
    pub fn new(query_method: &'a dyn QueryMethod, callback: &'a dyn ResultCallback) -> Self {
        Self {
            query_method,
            callback,
        }
    }

    /// Visit every cell of the grid's declared extent exactly once.
    ///
    /// Each cell's flag in `state` is set to the query method's verdict before
    /// the callback runs, so the callback sees (and may rewrite) it. Matches are
    /// appended to `results` in row-major order. The first failure aborts the
    /// scan; callers should pass staging buffers they can discard.
    pub fn scan(
        &self,
        grid: &dyn GridSource,
        query: &Value,
        state: &mut MatchState,
        results: &mut Vec<SearchResult>,
    ) -> Result<ScanSummary, SearchError> {
        let rows = grid.row_count();
        let cols = grid.col_count();
        let mut summary = ScanSummary::default();
        let mut owner = SearchOwner::new(grid, state);

        for row in 0..rows {
            for col in 0..cols {
                let value = grid.cell_value(row, col)?;
                let matched = self
                    .query_method
                    .matches(query, value)
                    .map_err(|source| SearchError::QueryMethodFailed { row, col, source })?;

                owner.set_search_result(row, col, matched);
                self.callback
                    .on_cell_visited(&mut owner, row, col, value, matched)
                    .map_err(|source| SearchError::CallbackFailed { row, col, source })?;

                summary.visited += 1;
                if matched {
                    summary.matched += 1;
                    results.push(SearchResult::new(row, col, value.clone()));
                }
            }
        }

        log::debug!(
            "Scanned {}x{} grid: {} cells visited, {} matched",
            rows,
            cols,
            summary.visited,
            summary.matched
        );
        Ok(summary)
    }
}
