use crate::core::controller::SearchController;
use crate::core::grid::{DataGrid, GridSource};
use crate::core::state::SearchResult;
use crate::error::{AppError, DisplayError};
use crate::utils::text::truncate_text_unicode;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use crossterm::terminal;
use std::collections::BTreeMap;

const MAX_CELL_WIDTH: usize = 100;

/// Formatter for grids and search results
pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
    highlight_color: Color,
    class_colors: BTreeMap<String, Color>,
}

impl TableDisplay {
    /// Create a new TableDisplay instance
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
            highlight_color: Color::Yellow,
            class_colors: BTreeMap::new(),
        }
    }

    /// Detect terminal width
    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _rows)) => {
                let width = cols as usize;
                // Clamp for stable layouts
                if width < 40 {
                    Some(40)
                } else if width > 200 {
                    Some(200)
                } else {
                    Some(width)
                }
            }
            Err(_) => Some(80),
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Colour for decorated cells whose class has no colour of its own.
    /// Unknown names keep the current colour.
    pub fn with_highlight_color(mut self, name: &str) -> Self {
        match parse_color(name) {
            Some(color) => self.highlight_color = color,
            None => log::warn!("Unknown highlight colour '{}', keeping default", name),
        }
        self
    }

    /// Colours per decoration class. Unknown colour names are skipped.
    pub fn with_class_colors(mut self, class_colors: &BTreeMap<String, String>) -> Self {
        for (class, name) in class_colors {
            match parse_color(name) {
                Some(color) => {
                    self.class_colors.insert(class.clone(), color);
                }
                None => log::warn!("Unknown colour '{}' for class '{}'", name, class),
            }
        }
        self
    }

    fn color_for_class(&self, class: &str) -> Color {
        self.class_colors
            .get(class)
            .copied()
            .unwrap_or(self.highlight_color)
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        self.configure_table_width(&mut table);
        table
    }

    fn header_cell(&self, text: &str) -> Cell {
        if self.use_colors {
            Cell::new(text)
                .add_attribute(Attribute::Bold)
                .fg(Color::Green)
        } else {
            Cell::new(text).add_attribute(Attribute::Bold)
        }
    }

    /// Render the grid, decorating cells the controller flags as results.
    pub fn render_grid(
        &self,
        grid: &DataGrid,
        search: &SearchController,
        limit: Option<usize>,
    ) -> Result<String, AppError> {
        let total_rows = grid.row_count();
        let cols = grid.col_count();
        if total_rows == 0 || cols == 0 {
            return Ok("Grid is empty.".to_string());
        }
        let rows_to_display = limit.unwrap_or(total_rows).min(total_rows);

        let mut table = self.new_table();
        let mut headers = vec![self.header_cell("#")];
        headers.extend((0..cols).map(|col| self.header_cell(&grid.column_name(col))));
        table.set_header(headers);

        for row in 0..rows_to_display {
            let mut cells = vec![Cell::new(row)];
            for col in 0..cols {
                let value = grid.cell_value(row, col)?;
                let text = self.format_cell_value(value);
                cells.push(self.decorated_cell(text, search.decoration(row, col), value));
            }
            table.add_row(cells);
        }

        let mut output = table.to_string();

        if rows_to_display != total_rows {
            output.push_str(&format!(
                "\nShowing {} of {} rows",
                rows_to_display, total_rows
            ));
        }

        let matched = search.match_state().len();
        output.push_str(&format!(
            "\n{} matching {} (class: {})",
            matched,
            if matched == 1 { "cell" } else { "cells" },
            search.get_result_class()
        ));

        Ok(output)
    }

    fn decorated_cell(&self, text: String, class: Option<&str>, value: &serde_json::Value) -> Cell {
        match class {
            Some(class) if self.use_colors => Cell::new(text)
                .fg(self.color_for_class(class))
                .add_attribute(Attribute::Bold),
            Some(_) => Cell::new(format!("*{}*", text)),
            None if self.use_colors && value.is_null() => Cell::new(text)
                .fg(Color::DarkGrey)
                .add_attribute(Attribute::Italic),
            None => Cell::new(text),
        }
    }

    /// Render the result list in table format
    pub fn render_results(&self, results: &[SearchResult]) -> Result<String, AppError> {
        if results.is_empty() {
            return Ok("No matching cells.".to_string());
        }

        let mut table = self.new_table();
        table.set_header(vec![
            self.header_cell("Row"),
            self.header_cell("Col"),
            self.header_cell("Value"),
        ]);

        for result in results {
            table.add_row(vec![
                Cell::new(result.row),
                Cell::new(result.col),
                Cell::new(self.format_cell_value(&result.data)),
            ]);
        }

        Ok(format!("{}\n{} matching cells", table, results.len()))
    }

    /// Render the result list as pretty JSON
    pub fn render_results_json(&self, results: &[SearchResult]) -> Result<String, AppError> {
        serde_json::to_string_pretty(results)
            .map_err(|e| AppError::Display(DisplayError::JsonOutput(e.to_string())))
    }

    /// Set table width to match the terminal size
    fn configure_table_width(&self, table: &mut Table) {
        if let Some(terminal_width) = self.max_width {
            // Leave room for borders and padding
            let available_width = if terminal_width > 20 {
                terminal_width - 6
            } else {
                terminal_width.max(40)
            };

            table.set_width(available_width as u16);
        } else {
            table.set_width(80);
        }
    }

    /// Format cell value
    pub fn format_cell_value(&self, value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::Null => "-".to_string(),
            serde_json::Value::String(s) => truncate_text_unicode(s, MAX_CELL_WIDTH),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Array(arr) => {
                if arr.is_empty() {
                    "[]".to_string()
                } else {
                    format!("[{} items]", arr.len())
                }
            }
            serde_json::Value::Object(obj) => {
                if obj.is_empty() {
                    "{}".to_string()
                } else {
                    format!("{{{} items}}", obj.len())
                }
            }
        }
    }
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a colour name such as `yellow` or `dark_red`.
pub fn parse_color(name: &str) -> Option<Color> {
    let color = match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "dark_red" => Color::DarkRed,
        "green" => Color::Green,
        "dark_green" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "dark_yellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "dark_blue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "dark_magenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "dark_cyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        "dark_grey" | "dark_gray" => Color::DarkGrey,
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::SearchOptions;
    use crate::core::registry::DefaultsRegistry;
    use serde_json::json;
    use std::sync::Arc;

    fn plain_display() -> TableDisplay {
        TableDisplay::new().with_max_width(120).with_colors(false)
    }

    fn searched(grid: &DataGrid, query: &str, options: SearchOptions) -> SearchController {
        let mut search =
            SearchController::with_registry(options, Arc::new(DefaultsRegistry::new()));
        search
            .query(grid, &json!(query))
            .expect("query should succeed");
        search
    }

    #[test]
    fn test_table_display_creation() {
        let display = TableDisplay::new();
        assert!(display.use_colors);
        assert_eq!(display.highlight_color, Color::Yellow);

        let display = TableDisplay::new().with_max_width(80).with_colors(false);
        assert_eq!(display.max_width, Some(80));
        assert!(!display.use_colors);
    }

    #[test]
    fn test_format_cell_value() {
        let display = TableDisplay::new();

        assert_eq!(display.format_cell_value(&json!(null)), "-");
        assert_eq!(display.format_cell_value(&json!("text")), "text");
        assert_eq!(display.format_cell_value(&json!(123)), "123");
        assert_eq!(display.format_cell_value(&json!(true)), "true");
        assert_eq!(display.format_cell_value(&json!([1, 2])), "[2 items]");
    }

    #[test]
    fn test_render_grid_marks_results() {
        let grid = DataGrid::sample(3, 3);
        let search = searched(&grid, "2", SearchOptions::new());

        let rendered = plain_display()
            .render_grid(&grid, &search, None)
            .expect("render should succeed");
        assert!(rendered.contains("*A2*"));
        assert!(rendered.contains("*C2*"));
        assert!(!rendered.contains("*A1*"));
        assert!(rendered.contains("3 matching cells (class: htSearchResult)"));
    }

    #[test]
    fn test_render_grid_with_limit_and_custom_class() {
        let grid = DataGrid::sample(5, 2);
        let search = searched(
            &grid,
            "A",
            SearchOptions::new().with_search_result_class("customSearchResultClass"),
        );

        let rendered = plain_display()
            .render_grid(&grid, &search, Some(2))
            .expect("render should succeed");
        assert!(rendered.contains("Showing 2 of 5 rows"));
        assert!(rendered.contains("class: customSearchResultClass"));
        assert!(!rendered.contains("A3"));
    }

    #[test]
    fn test_render_empty_grid() {
        let grid = DataGrid::new();
        let search = searched(&grid, "A", SearchOptions::new());
        let rendered = plain_display()
            .render_grid(&grid, &search, None)
            .expect("render should succeed");
        assert_eq!(rendered, "Grid is empty.");
    }

    #[test]
    fn test_render_results() {
        let display = plain_display();
        assert_eq!(
            display.render_results(&[]).expect("render should succeed"),
            "No matching cells."
        );

        let results = vec![
            SearchResult::new(0, 1, json!("Bob")),
            SearchResult::new(4, 0, json!(22)),
        ];
        let rendered = display
            .render_results(&results)
            .expect("render should succeed");
        assert!(rendered.contains("Bob"));
        assert!(rendered.contains("22"));
        assert!(rendered.ends_with("2 matching cells"));
    }

    #[test]
    fn test_render_results_json() {
        let results = vec![SearchResult::new(1, 0, json!("A2"))];
        let rendered = plain_display()
            .render_results_json(&results)
            .expect("render should succeed");
        let parsed: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON");
        assert_eq!(parsed, json!([{"row": 1, "col": 0, "data": "A2"}]));
    }

    #[test]
    fn test_class_colours() {
        let mut class_colors = BTreeMap::new();
        class_colors.insert("hit".to_string(), "magenta".to_string());
        class_colors.insert("bad".to_string(), "sparkly".to_string());

        let display = TableDisplay::new()
            .with_highlight_color("cyan")
            .with_class_colors(&class_colors);
        assert_eq!(display.color_for_class("hit"), Color::Magenta);
        assert_eq!(display.color_for_class("bad"), Color::Cyan);
        assert_eq!(display.color_for_class("other"), Color::Cyan);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Yellow"), Some(Color::Yellow));
        assert_eq!(parse_color("dark-grey"), Some(Color::DarkGrey));
        assert_eq!(parse_color("gray"), Some(Color::Grey));
        assert_eq!(parse_color("sparkly"), None);
    }
}
