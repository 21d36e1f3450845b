//! Display layer: renders grids with search decorations and result lists.

pub mod table;

pub use table::{TableDisplay, parse_color};
