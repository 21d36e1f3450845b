use crate::cli::main_types::{Commands, ConfigCommands, OutputFormat, QueryArgs};
use crate::core::controller::QueryOverrides;
use crate::core::lifecycle::SearchFeature;
use crate::display::TableDisplay;
use crate::error::{AppError, CliError};
use crate::storage::config::Config;
use crate::storage::grid_file::load_grid;
use serde_json::Value;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
}

impl Dispatcher {
    /// `config_path` of `None` means the platform config location.
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    pub fn dispatch(&mut self, command: Commands) -> Result<String, AppError> {
        match command {
            Commands::Query(args) => self.handle_query(args),
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    fn handle_query(&self, args: QueryArgs) -> Result<String, AppError> {
        if args.limit == Some(0) {
            return Err(AppError::Cli(CliError::InvalidArguments(
                "--limit must be at least 1".to_string(),
            )));
        }

        let mut feature = SearchFeature::new();
        feature.apply(&self.config.search);
        let search = feature
            .controller_mut()
            .ok_or(AppError::Cli(CliError::FeatureDisabled))?;

        if let Some(class) = args.class {
            if class.trim().is_empty() {
                return Err(AppError::Cli(CliError::InvalidArguments(
                    "--class cannot be empty".to_string(),
                )));
            }
            let options = search.options().clone().with_search_result_class(class);
            search.update_options(options);
        }

        log::info!("Loading grid from {}", args.file.to_string_lossy());
        let grid = load_grid(&args.file, args.spare_rows)?;

        let mut overrides = QueryOverrides::new();
        if let Some(method) = args.method {
            log::debug!("Using '{}' query method for this query", method);
            overrides = overrides.with_query_method(method.to_method());
        }

        let query = args.query.map(Value::String).unwrap_or(Value::Null);
        let results = search.query_with(&grid, &query, &overrides)?;

        let display = self.table_display(args.no_color);
        match args.format {
            OutputFormat::Grid => {
                let limit = args.limit.or(self.config.display.row_limit);
                display.render_grid(&grid, search, limit)
            }
            OutputFormat::Table => display.render_results(&results),
            OutputFormat::Json => display.render_results_json(&results),
        }
    }

    fn table_display(&self, no_color: bool) -> TableDisplay {
        let settings = &self.config.display;
        let use_colors = !no_color
            && settings
                .use_colors
                .unwrap_or_else(|| atty::is(atty::Stream::Stdout));

        let mut display = TableDisplay::new()
            .with_colors(use_colors)
            .with_class_colors(&settings.class_colors);
        if let Some(width) = settings.max_width {
            display = display.with_max_width(width);
        }
        if let Some(color) = &settings.highlight_color {
            display = display.with_highlight_color(color);
        }
        display
    }

    fn handle_config_command(&mut self, command: ConfigCommands) -> Result<String, AppError> {
        match command {
            ConfigCommands::Show => {
                let toml = self.config.to_toml()?;
                if toml.trim().is_empty() {
                    Ok("(default configuration)".to_string())
                } else {
                    Ok(toml.trim_end().to_string())
                }
            }
            ConfigCommands::Set { key, value } => {
                self.config.set(&key, &value)?;
                self.config.save(self.config_path.clone())?;
                log::info!("Saved configuration key {}", key);
                Ok(format!("✅ Set {} = {}", key, value))
            }
        }
    }
}
