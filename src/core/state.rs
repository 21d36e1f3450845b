//! Search results and the per-cell "is search result" flags.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// One matching cell, reported in row-major order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub row: usize,
    pub col: usize,
    pub data: Value,
}

impl SearchResult {
    pub fn new(row: usize, col: usize, data: Value) -> Self {
        Self { row, col, data }
    }
}

/// Which cells are flagged as results of the latest completed query.
///
/// Only `true` flags are stored; every other cell reads as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchState {
    flagged: HashSet<(usize, usize)>,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the flag for a cell. Idempotent.
    pub fn set(&mut self, row: usize, col: usize, is_result: bool) {
        if is_result {
            self.flagged.insert((row, col));
        } else {
            self.flagged.remove(&(row, col));
        }
    }

    pub fn is_search_result(&self, row: usize, col: usize) -> bool {
        self.flagged.contains(&(row, col))
    }

    pub fn len(&self) -> usize {
        self.flagged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flagged.is_empty()
    }

    /// Flagged cells in row-major order.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = self.flagged.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    pub fn clear(&mut self) {
        self.flagged.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_is_idempotent() {
        let mut once = MatchState::new();
        once.set(1, 2, true);

        let mut twice = MatchState::new();
        twice.set(1, 2, true);
        twice.set(1, 2, true);

        assert_eq!(once, twice);
        assert!(twice.is_search_result(1, 2));
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn test_clearing_a_flag() {
        let mut state = MatchState::new();
        state.set(0, 0, true);
        state.set(0, 0, false);
        state.set(3, 3, false);
        assert!(state.is_empty());
        assert!(!state.is_search_result(0, 0));
    }

    #[test]
    fn test_cells_are_row_major() {
        let mut state = MatchState::new();
        state.set(2, 0, true);
        state.set(0, 3, true);
        state.set(0, 1, true);
        assert_eq!(state.cells(), vec![(0, 1), (0, 3), (2, 0)]);

        state.clear();
        assert!(state.cells().is_empty());
    }
}
