//! Enabling and disabling search on a host grid.

use super::controller::{SearchController, SearchOptions};
use super::method::BuiltinQueryMethod;
use super::registry::DefaultsRegistry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The host-level `search` setting: a plain toggle, or a table of options
/// (which implies enabled).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchSetting {
    Toggle(bool),
    Configured(SearchSettingOptions),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettingOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_method: Option<BuiltinQueryMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_result_class: Option<String>,
}

/// An absent setting leaves search off.
impl Default for SearchSetting {
    fn default() -> Self {
        SearchSetting::Toggle(false)
    }
}

impl SearchSetting {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, SearchSetting::Toggle(false))
    }

    /// Controller options for this setting, or `None` when search is off.
    pub fn to_options(&self) -> Option<SearchOptions> {
        match self {
            SearchSetting::Toggle(false) => None,
            SearchSetting::Toggle(true) => Some(SearchOptions::new()),
            SearchSetting::Configured(settings) => {
                let mut options = SearchOptions::new();
                if let Some(method) = settings.query_method {
                    options = options.with_query_method(method.to_method());
                }
                if let Some(class) = &settings.search_result_class {
                    options = options.with_search_result_class(class.clone());
                }
                Some(options)
            }
        }
    }
}

/// Owns the controller while search is enabled. Disabling drops it together
/// with its match-state.
pub struct SearchFeature {
    registry: Arc<DefaultsRegistry>,
    controller: Option<SearchController>,
}

impl SearchFeature {
    /// A disabled feature backed by the process-wide registry.
    pub fn new() -> Self {
        Self::with_registry(DefaultsRegistry::global())
    }

    pub fn with_registry(registry: Arc<DefaultsRegistry>) -> Self {
        Self {
            registry,
            controller: None,
        }
    }

    pub fn apply(&mut self, setting: &SearchSetting) {
        match setting.to_options() {
            Some(options) => self.enable(options),
            None => self.disable(),
        }
    }

    /// Create the controller, or reconfigure the existing one.
    pub fn enable(&mut self, options: SearchOptions) {
        match self.controller.as_mut() {
            Some(controller) => {
                log::debug!("Reconfiguring search controller");
                controller.update_options(options);
            }
            None => {
                log::debug!("Enabling search");
                self.controller = Some(SearchController::with_registry(
                    options,
                    Arc::clone(&self.registry),
                ));
            }
        }
    }

    pub fn disable(&mut self) {
        if let Some(mut controller) = self.controller.take() {
            log::debug!("Disabling search");
            controller.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.controller.is_some()
    }

    pub fn controller(&self) -> Option<&SearchController> {
        self.controller.as_ref()
    }

    pub fn controller_mut(&mut self) -> Option<&mut SearchController> {
        self.controller.as_mut()
    }
}

impl Default for SearchFeature {
    fn default() -> Self {
        Self::new()
    }
}
