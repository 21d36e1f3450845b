//! Shared default query method and result callback.

use super::callback::{CallbackRef, DEFAULT_CALLBACK};
use super::method::{DEFAULT_QUERY_METHOD, QueryMethodRef};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

static GLOBAL: LazyLock<Arc<DefaultsRegistry>> =
    LazyLock::new(|| Arc::new(DefaultsRegistry::new()));

/// Holds the defaults used by every controller that has no override of its
/// own. Values are read when a query runs, so a change here is observed by
/// controllers created earlier.
pub struct DefaultsRegistry {
    query_method: RwLock<QueryMethodRef>,
    callback: RwLock<CallbackRef>,
}

impl DefaultsRegistry {
    /// A registry holding the built-in defaults.
    pub fn new() -> Self {
        Self {
            query_method: RwLock::new(Arc::new(DEFAULT_QUERY_METHOD)),
            callback: RwLock::new(Arc::new(DEFAULT_CALLBACK)),
        }
    }

    /// The process-wide registry.
    pub fn global() -> Arc<DefaultsRegistry> {
        Arc::clone(&*GLOBAL)
    }

    pub fn set_default_query_method(&self, method: QueryMethodRef) {
        log::debug!("Replacing default query method");
        *self
            .query_method
            .write()
            .unwrap_or_else(PoisonError::into_inner) = method;
    }

    pub fn set_default_callback(&self, callback: CallbackRef) {
        log::debug!("Replacing default result callback");
        *self.callback.write().unwrap_or_else(PoisonError::into_inner) = callback;
    }

    pub fn default_query_method(&self) -> QueryMethodRef {
        let method = self
            .query_method
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*method)
    }

    pub fn default_callback(&self) -> CallbackRef {
        let callback = self.callback.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*callback)
    }

    /// Restore the built-in query method and callback.
    pub fn reset(&self) {
        self.set_default_query_method(Arc::new(DEFAULT_QUERY_METHOD));
        self.set_default_callback(Arc::new(DEFAULT_CALLBACK));
    }
}

impl Default for DefaultsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
