//! CLI layer - argument parsing and command dispatch

pub mod dispatcher;
pub mod main_types;
