//! Storage layer for grid-search
//!
//! Handles the TOML configuration file and loading grid data from JSON files.

use crate::error::StorageError;

pub mod config;
pub mod grid_file;

type Result<T> = std::result::Result<T, StorageError>;
