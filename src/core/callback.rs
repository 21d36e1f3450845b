//! Result callbacks, invoked once for every visited cell.

use super::grid::GridSource;
use super::method::Fallible;
use super::state::MatchState;
use crate::error::HookError;
use serde_json::Value;
use std::sync::Arc;

/// The owner handed to a result callback: the grid being scanned and the
/// match-state the scan is building.
pub struct SearchOwner<'a> {
    grid: &'a dyn GridSource,
    state: &'a mut MatchState,
}

impl<'a> SearchOwner<'a> {
    pub fn new(grid: &'a dyn GridSource, state: &'a mut MatchState) -> Self {
        Self { grid, state }
    }

    pub fn grid(&self) -> &dyn GridSource {
        self.grid
    }

    pub fn set_search_result(&mut self, row: usize, col: usize, is_result: bool) {
        self.state.set(row, col, is_result);
    }

    pub fn is_search_result(&self, row: usize, col: usize) -> bool {
        self.state.is_search_result(row, col)
    }
}

/// Side effect run for every cell a query visits, matched or not.
pub trait ResultCallback: Send + Sync {
    fn on_cell_visited(
        &self,
        owner: &mut SearchOwner<'_>,
        row: usize,
        col: usize,
        value: &Value,
        matched: bool,
    ) -> Result<(), HookError>;
}

/// Shared handle to a result callback.
pub type CallbackRef = Arc<dyn ResultCallback>;

impl<F> ResultCallback for F
where
    F: Fn(&mut SearchOwner<'_>, usize, usize, &Value, bool) + Send + Sync,
{
    fn on_cell_visited(
        &self,
        owner: &mut SearchOwner<'_>,
        row: usize,
        col: usize,
        value: &Value,
        matched: bool,
    ) -> Result<(), HookError> {
        self(owner, row, col, value, matched);
        Ok(())
    }
}

impl<F> ResultCallback for Fallible<F>
where
    F: Fn(&mut SearchOwner<'_>, usize, usize, &Value, bool) -> Result<(), HookError>
        + Send
        + Sync,
{
    fn on_cell_visited(
        &self,
        owner: &mut SearchOwner<'_>,
        row: usize,
        col: usize,
        value: &Value,
        matched: bool,
    ) -> Result<(), HookError> {
        (self.0)(owner, row, col, value, matched)
    }
}

/// Records `matched` as the cell's "is search result" flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultCallback;

pub const DEFAULT_CALLBACK: DefaultCallback = DefaultCallback;

impl ResultCallback for DefaultCallback {
    fn on_cell_visited(
        &self,
        owner: &mut SearchOwner<'_>,
        row: usize,
        col: usize,
        _value: &Value,
        matched: bool,
    ) -> Result<(), HookError> {
        owner.set_search_result(row, col, matched);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::DataGrid;
    use serde_json::json;

    #[test]
    fn test_default_callback_writes_flag() {
        let grid = DataGrid::sample(2, 2);
        let mut state = MatchState::new();
        let mut owner = SearchOwner::new(&grid, &mut state);

        DEFAULT_CALLBACK
            .on_cell_visited(&mut owner, 1, 0, &json!("A2"), true)
            .expect("default callback never fails");
        assert!(owner.is_search_result(1, 0));

        DEFAULT_CALLBACK
            .on_cell_visited(&mut owner, 1, 0, &json!("A2"), false)
            .expect("default callback never fails");
        assert!(!owner.is_search_result(1, 0));
    }

    #[test]
    fn test_default_callback_is_idempotent() {
        let grid = DataGrid::sample(1, 1);

        let mut once = MatchState::new();
        {
            let mut owner = SearchOwner::new(&grid, &mut once);
            let _ = DEFAULT_CALLBACK.on_cell_visited(&mut owner, 0, 0, &json!("A1"), true);
        }

        let mut twice = MatchState::new();
        {
            let mut owner = SearchOwner::new(&grid, &mut twice);
            let _ = DEFAULT_CALLBACK.on_cell_visited(&mut owner, 0, 0, &json!("A1"), true);
            let _ = DEFAULT_CALLBACK.on_cell_visited(&mut owner, 0, 0, &json!("A1"), true);
        }

        assert_eq!(once, twice);
    }

    #[test]
    fn test_owner_exposes_grid() {
        let grid = DataGrid::sample(3, 4);
        let mut state = MatchState::new();
        let owner = SearchOwner::new(&grid, &mut state);
        assert_eq!(owner.grid().row_count(), 3);
        assert_eq!(owner.grid().col_count(), 4);
    }

    #[test]
    fn test_fallible_callback() {
        let grid = DataGrid::sample(1, 1);
        let mut state = MatchState::new();
        let mut owner = SearchOwner::new(&grid, &mut state);
        let strict = Fallible(
            |_: &mut SearchOwner<'_>, row: usize, _: usize, _: &Value, _: bool| {
                if row > 0 {
                    Err(HookError::new("row out of range"))
                } else {
                    Ok(())
                }
            },
        );

        assert!(strict.on_cell_visited(&mut owner, 0, 0, &Value::Null, false).is_ok());
        assert_eq!(
            strict.on_cell_visited(&mut owner, 1, 0, &Value::Null, false),
            Err(HookError::new("row out of range"))
        );
    }
}
