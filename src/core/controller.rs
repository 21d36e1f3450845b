//! Per-grid search facade.

use super::callback::CallbackRef;
use super::engine::MatchEngine;
use super::grid::GridSource;
use super::method::QueryMethodRef;
use super::registry::DefaultsRegistry;
use super::resolver::{resolve_callback, resolve_query_method};
use super::state::{MatchState, SearchResult};
use crate::error::SearchError;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Class name applied to matching cells when none is configured.
pub const DEFAULT_SEARCH_RESULT_CLASS: &str = "htSearchResult";

/// Instance-level configuration. Unset hooks fall back to the registry at
/// query time.
#[derive(Clone, Default)]
pub struct SearchOptions {
    pub query_method: Option<QueryMethodRef>,
    pub callback: Option<CallbackRef>,
    pub search_result_class: Option<String>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query_method(mut self, query_method: QueryMethodRef) -> Self {
        self.query_method = Some(query_method);
        self
    }

    pub fn with_callback(mut self, callback: CallbackRef) -> Self {
        self.callback = Some(callback);
        self
    }

    pub fn with_search_result_class(mut self, class: impl Into<String>) -> Self {
        self.search_result_class = Some(class.into());
        self
    }
}

impl fmt::Debug for SearchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchOptions")
            .field("query_method", &self.query_method.as_ref().map(|_| ".."))
            .field("callback", &self.callback.as_ref().map(|_| ".."))
            .field("search_result_class", &self.search_result_class)
            .finish()
    }
}

/// Per-call overrides, each independent of the other.
#[derive(Clone, Default)]
pub struct QueryOverrides {
    pub callback: Option<CallbackRef>,
    pub query_method: Option<QueryMethodRef>,
}

impl QueryOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(mut self, callback: CallbackRef) -> Self {
        self.callback = Some(callback);
        self
    }

    pub fn with_query_method(mut self, query_method: QueryMethodRef) -> Self {
        self.query_method = Some(query_method);
        self
    }
}

/// Runs queries against a grid and remembers which cells matched the latest
/// completed one.
pub struct SearchController {
    options: SearchOptions,
    registry: Arc<DefaultsRegistry>,
    state: MatchState,
}

impl SearchController {
    /// A controller backed by the process-wide registry.
    pub fn new(options: SearchOptions) -> Self {
        Self::with_registry(options, DefaultsRegistry::global())
    }

    pub fn with_registry(options: SearchOptions, registry: Arc<DefaultsRegistry>) -> Self {
        Self {
            options,
            registry,
            state: MatchState::new(),
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Replace the instance configuration. The current match-state is kept.
    pub fn update_options(&mut self, options: SearchOptions) {
        self.options = options;
    }

    pub fn registry(&self) -> &Arc<DefaultsRegistry> {
        &self.registry
    }

    pub fn query(
        &mut self,
        grid: &dyn GridSource,
        query: &Value,
    ) -> Result<Vec<SearchResult>, SearchError> {
        self.query_with(grid, query, &QueryOverrides::default())
    }

    /// Run a query, replacing the match-state only if the whole scan succeeds.
    pub fn query_with(
        &mut self,
        grid: &dyn GridSource,
        query: &Value,
        overrides: &QueryOverrides,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let query_method = resolve_query_method(
            overrides.query_method.as_ref(),
            self.options.query_method.as_ref(),
            &self.registry,
        );
        let callback = resolve_callback(
            overrides.callback.as_ref(),
            self.options.callback.as_ref(),
            &self.registry,
        );
        log::debug!(
            "Running query {} over {}x{} grid",
            query,
            grid.row_count(),
            grid.col_count()
        );

        let engine = MatchEngine::new(&*query_method, &*callback);
        let mut staged = MatchState::new();
        let mut results = Vec::new();
        engine.scan(grid, query, &mut staged, &mut results)?;

        self.state = staged;
        Ok(results)
    }

    pub fn get_result_class(&self) -> &str {
        self.options
            .search_result_class
            .as_deref()
            .unwrap_or(DEFAULT_SEARCH_RESULT_CLASS)
    }

    pub fn is_result(&self, row: usize, col: usize) -> bool {
        self.state.is_search_result(row, col)
    }

    /// Class to attach to a cell when drawing it, if any.
    pub fn decoration(&self, row: usize, col: usize) -> Option<&str> {
        self.is_result(row, col).then(|| self.get_result_class())
    }

    pub fn match_state(&self) -> &MatchState {
        &self.state
    }

    /// Drop every flag, as on teardown.
    pub fn clear(&mut self) {
        self.state.clear();
    }
}

impl fmt::Debug for SearchController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchController")
            .field("options", &self.options)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
