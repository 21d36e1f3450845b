//! Utils module - Shared helpers used across layers

/// Unicode-aware text helpers for table cells
pub mod text;

/// Logger setup for the binary
pub mod logging;
