use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
    #[error("GridError: {0}")]
    Grid(#[from] GridError),
    #[error("SearchError: {0}")]
    Search(#[from] SearchError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Search feature is disabled")]
    FeatureDisabled,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Grid file {path} could not be parsed: {message}")]
    GridParse { path: String, message: String },
    #[error("Configuration save failed: {message}")]
    ConfigSaveFailed { message: String },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Table formatting failed: {0}")]
    TableFormat(String),
    #[error("JSON output failed: {0}")]
    JsonOutput(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key '{key}'")]
    UnknownKey { key: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Cell ({row}, {col}) is outside the grid extent {rows}x{cols}")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("Cell ({row}, {col}) could not be read: {reason}")]
    Unreadable {
        row: usize,
        col: usize,
        reason: String,
    },
}

/// Failure raised from inside a user-supplied query method or result callback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HookError {
    pub message: String,
}

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Query method failed at cell ({row}, {col}): {source}")]
    QueryMethodFailed {
        row: usize,
        col: usize,
        source: HookError,
    },
    #[error("Result callback failed at cell ({row}, {col}): {source}")]
    CallbackFailed {
        row: usize,
        col: usize,
        source: HookError,
    },
    #[error("Grid read failed: {0}")]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(CliError::FeatureDisabled) => ErrorSeverity::Low,
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(storage_error) => match storage_error {
                StorageError::ConfigDirNotFound => ErrorSeverity::Critical,
                StorageError::GridParse { .. } => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Display(_) => ErrorSeverity::Low,
            AppError::Grid(_) => ErrorSeverity::High,
            AppError::Search(search_error) => match search_error {
                SearchError::Grid(_) => ErrorSeverity::High,
                SearchError::QueryMethodFailed { .. } | SearchError::CallbackFailed { .. } => {
                    ErrorSeverity::Medium
                }
            },
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Cli(CliError::FeatureDisabled) => "Search is turned off".to_string(),
            AppError::Storage(StorageError::GridParse { path, .. }) => {
                format!("Could not read grid data from {}", path)
            }
            AppError::Grid(GridError::OutOfBounds { row, col, .. }) => {
                format!("Cell ({}, {}) does not exist", row, col)
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Cli(CliError::FeatureDisabled) => {
                Some("'grid-search config set search.enabled true' to turn search on".to_string())
            }
            AppError::Config(ConfigError::UnknownKey { .. }) => {
                Some(
                    "Keys: search.enabled, search.query_method, search.search_result_class, \
                     display.use_colors, display.max_width, display.row_limit, \
                     display.highlight_color, display.class_colors.<class>"
                        .to_string(),
                )
            }
            AppError::Storage(StorageError::GridParse { .. }) => Some(
                "Grid files must be a JSON array of rows or an object with a 'rows' field"
                    .to_string(),
            ),
            _ => None,
        }
    }
}
