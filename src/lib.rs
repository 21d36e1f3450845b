//! # grid-search
//!
//! In-grid search for tabular data: run a query over every cell of a grid,
//! remember which cells matched, and tell a renderer how to decorate them.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grid_search::prelude::*;
//! use serde_json::json;
//!
//! let grid = DataGrid::sample(5, 5);
//! let mut search = SearchController::new(SearchOptions::new());
//! let results = search.query(&grid, &json!("a2"))?;
//! assert_eq!(results.len(), 1);
//! assert_eq!(search.decoration(1, 0), Some("htSearchResult"));
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │            CLI Layer                │  clap commands and dispatch
//! ├─────────────────────────────────────┤
//! │           Core Layer                │  query methods, callbacks, registry,
//! │                                     │  match engine, controller
//! ├─────────────────────────────────────┤
//! │         Storage Layer               │  TOML config, JSON grid files
//! ├─────────────────────────────────────┤
//! │     Display / Utils Layers          │  tables, text width, logging
//! └─────────────────────────────────────┘
//! ```
//!
//! Process-wide defaults for the query method and result callback live in
//! [`core::registry::DefaultsRegistry`]. A controller resolves each hook per
//! query: call-site override, then its own options, then the registry.

pub use error::AppError;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::{AppError, HookError, SearchError};

    pub use crate::core::{
        DataGrid, DefaultsRegistry, Fallible, GridSource, QueryMethod, QueryOverrides,
        ResultCallback, SearchController, SearchFeature, SearchOptions, SearchOwner,
        SearchResult, SearchSetting,
    };

    pub use crate::storage::config::Config;
    pub use crate::storage::grid_file::load_grid;

    pub use crate::display::TableDisplay;
}

/// Command-line interface - argument types and dispatch.
pub mod cli;

/// Search core - everything needed to run and remember a query.
pub mod core;

/// Storage layer - configuration and grid file loading.
pub mod storage;

/// Display layer - terminal rendering of grids and results.
pub mod display;

/// Error handling with severity levels and troubleshooting hints.
pub mod error;

/// Utilities layer - text width and logger setup.
pub mod utils;

pub type Result<T> = std::result::Result<T, AppError>;
