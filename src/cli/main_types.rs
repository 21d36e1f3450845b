use crate::core::method::BuiltinQueryMethod;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid-search")]
#[command(about = "Search the cells of a JSON data grid and highlight the matches")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, env = "GRID_SEARCH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a search query over a grid file
    Query(QueryArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// JSON grid file
    pub file: PathBuf,
    /// Text to search for. Without it every decoration is cleared
    pub query: Option<String>,
    /// Predicate for this query only (contains, exact)
    #[arg(long)]
    pub method: Option<BuiltinQueryMethod>,
    /// Class attached to matching cells
    #[arg(long)]
    pub class: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Grid)]
    pub format: OutputFormat,
    /// Empty rows appended below the data
    #[arg(long, default_value = "0")]
    pub spare_rows: usize,
    /// Maximum number of grid rows to show
    #[arg(long)]
    pub limit: Option<usize>,
    /// Disable colours
    #[arg(long)]
    pub no_color: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// The whole grid with matches decorated
    Grid,
    /// Only the matching cells
    Table,
    /// Matching cells as JSON
    Json,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key, e.g. search.query_method
        key: String,
        /// Configuration value
        value: String,
    },
}
