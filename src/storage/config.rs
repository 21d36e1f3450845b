use super::Result;
use crate::core::lifecycle::{SearchSetting, SearchSettingOptions};
use crate::core::method::BuiltinQueryMethod;
use crate::error::{ConfigError, StorageError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// The CLI searches unless the file turns it off.
    #[serde(default = "enabled_search")]
    pub search: SearchSetting,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DisplaySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_colors: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_color: Option<String>,
    /// Colour per decoration class name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub class_colors: BTreeMap<String, String>,
}

fn enabled_search() -> SearchSetting {
    SearchSetting::Toggle(true)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: enabled_search(),
            display: DisplaySettings::default(),
        }
    }
}

impl Config {
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!(
                "No config at {}, using defaults",
                config_path.to_string_lossy()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: e.to_string(),
            })?;

        Ok(config)
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = self.to_toml()?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| StorageError::ConfigSaveFailed {
            message: e.to_string(),
        })
    }

    /// Config file inside an explicit directory.
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(Self::path_in(&config_dir.join("grid-search")))
    }

    /// Set a value by dotted key, e.g. `display.row_limit`.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), ConfigError> {
        match key {
            "search.enabled" => {
                let enabled = parse_bool(key, value)?;
                if !enabled {
                    self.search = SearchSetting::Toggle(false);
                } else if !self.search.is_enabled() {
                    self.search = SearchSetting::Toggle(true);
                }
            }
            "search.query_method" => {
                let method = value
                    .parse::<BuiltinQueryMethod>()
                    .map_err(|reason| invalid(key, value, &reason))?;
                self.update_search_options(|options| options.query_method = Some(method));
            }
            "search.search_result_class" => {
                if value.trim().is_empty() {
                    return Err(invalid(key, value, "class name cannot be empty"));
                }
                self.update_search_options(|options| {
                    options.search_result_class = Some(value.to_string())
                });
            }
            "display.use_colors" => self.display.use_colors = Some(parse_bool(key, value)?),
            "display.max_width" => self.display.max_width = Some(parse_usize(key, value)?),
            "display.row_limit" => self.display.row_limit = Some(parse_usize(key, value)?),
            "display.highlight_color" => self.display.highlight_color = Some(value.to_string()),
            _ => match key.strip_prefix("display.class_colors.") {
                Some(class) if !class.is_empty() => {
                    self.display
                        .class_colors
                        .insert(class.to_string(), value.to_string());
                }
                _ => {
                    return Err(ConfigError::UnknownKey {
                        key: key.to_string(),
                    });
                }
            },
        }
        Ok(())
    }

    /// Edit the search options table, turning a toggle into one.
    fn update_search_options(&mut self, edit: impl FnOnce(&mut SearchSettingOptions)) {
        let mut options = match &self.search {
            SearchSetting::Configured(options) => options.clone(),
            SearchSetting::Toggle(_) => SearchSettingOptions::default(),
        };
        edit(&mut options);
        self.search = SearchSetting::Configured(options);
    }
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_bool(key: &str, value: &str) -> std::result::Result<bool, ConfigError> {
    value
        .parse::<bool>()
        .map_err(|_| invalid(key, value, "expected 'true' or 'false'"))
}

fn parse_usize(key: &str, value: &str) -> std::result::Result<usize, ConfigError> {
    value
        .parse::<usize>()
        .map_err(|_| invalid(key, value, "expected a non-negative number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.search, SearchSetting::Toggle(true));
        assert_eq!(config.display, DisplaySettings::default());
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = Config::path_in(temp_dir.path());

        let mut config = Config::default();
        config
            .set("search.search_result_class", "hit")
            .expect("Failed to set class");
        config
            .set("display.class_colors.hit", "magenta")
            .expect("Failed to set class colour");
        config
            .set("display.row_limit", "50")
            .expect("Failed to set row limit");

        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");
        let loaded_config = Config::load(Some(config_path)).expect("Failed to load config");

        assert_eq!(loaded_config, config);
    }

    #[test]
    fn test_missing_search_key_means_enabled() {
        let config: Config = toml::from_str("[display]\nrow_limit = 3\n").expect("valid toml");
        assert_eq!(config.search, SearchSetting::Toggle(true));
        assert_eq!(config.display.row_limit, Some(3));

        let config: Config = toml::from_str("").expect("empty file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_toggle_and_table_forms() {
        let config: Config = toml::from_str("search = false\n").expect("toggle form");
        assert_eq!(config.search, SearchSetting::Toggle(false));

        let config: Config = toml::from_str(
            "[search]\nquery_method = \"exact\"\nsearch_result_class = \"custom\"\n",
        )
        .expect("table form");
        assert_eq!(
            config.search,
            SearchSetting::Configured(SearchSettingOptions {
                query_method: Some(BuiltinQueryMethod::Exact),
                search_result_class: Some("custom".to_string()),
            })
        );
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load(Some(temp_dir.path().join("missing.toml")))
            .expect("Failed to load default config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = Config::path_in(temp_dir.path());
        fs::write(&config_path, "search = [").expect("Failed to write config");

        let err = Config::load(Some(config_path)).expect_err("parse should fail");
        assert!(matches!(err, StorageError::ConfigParseError { .. }));
    }

    #[test]
    fn test_set_search_enabled() {
        let mut config = Config::default();
        config.set("search.enabled", "false").expect("valid bool");
        assert!(!config.search.is_enabled());

        config.set("search.enabled", "true").expect("valid bool");
        assert_eq!(config.search, SearchSetting::Toggle(true));

        config.set("search.query_method", "exact").expect("valid method");
        config.set("search.enabled", "true").expect("valid bool");
        assert!(matches!(config.search, SearchSetting::Configured(_)));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("search.enabled", "yes"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("search.query_method", "regex"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("display.max_width", "-3"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("search.colour", "red"),
            Err(ConfigError::UnknownKey { .. })
        ));
        assert!(matches!(
            config.set("display.class_colors.", "red"),
            Err(ConfigError::UnknownKey { .. })
        ));
    }
}
