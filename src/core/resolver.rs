//! Picks the query method and callback for one query call.
//!
//! Precedence is call-site override, then instance configuration, then the
//! registry default. The two choices are independent of each other.

use super::callback::CallbackRef;
use super::method::QueryMethodRef;
use super::registry::DefaultsRegistry;
use std::sync::Arc;

/// First present value of an ordered sequence of optional levels.
pub fn first_present<T>(levels: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    levels.into_iter().flatten().next()
}

pub fn resolve_query_method(
    call_site: Option<&QueryMethodRef>,
    instance: Option<&QueryMethodRef>,
    registry: &DefaultsRegistry,
) -> QueryMethodRef {
    first_present([call_site, instance])
        .map(Arc::clone)
        .unwrap_or_else(|| {
            log::trace!("No query method override, using registry default");
            registry.default_query_method()
        })
}

pub fn resolve_callback(
    call_site: Option<&CallbackRef>,
    instance: Option<&CallbackRef>,
    registry: &DefaultsRegistry,
) -> CallbackRef {
    first_present([call_site, instance])
        .map(Arc::clone)
        .unwrap_or_else(|| {
            log::trace!("No callback override, using registry default");
            registry.default_callback()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn constant(result: bool) -> QueryMethodRef {
        Arc::new(move |_: &Value, _: &Value| result)
    }

    #[test]
    fn test_first_present() {
        assert_eq!(first_present([None, Some(2), Some(3)]), Some(2));
        assert_eq!(first_present([Some(1), None]), Some(1));
        assert_eq!(first_present::<i32>([None, None]), None);
        assert_eq!(first_present(Vec::<Option<i32>>::new()), None);
    }

    #[test]
    fn test_call_site_wins() {
        let registry = DefaultsRegistry::new();
        let call = constant(true);
        let instance = constant(false);
        let resolved = resolve_query_method(Some(&call), Some(&instance), &registry);
        assert!(Arc::ptr_eq(&resolved, &call));
    }

    #[test]
    fn test_instance_beats_registry() {
        let registry = DefaultsRegistry::new();
        let instance = constant(true);
        let resolved = resolve_query_method(None, Some(&instance), &registry);
        assert!(Arc::ptr_eq(&resolved, &instance));
    }

    #[test]
    fn test_registry_fallback() {
        let registry = DefaultsRegistry::new();
        let registry_method = constant(true);
        registry.set_default_query_method(Arc::clone(&registry_method));
        let resolved = resolve_query_method(None, None, &registry);
        assert!(Arc::ptr_eq(&resolved, &registry_method));

        let registry_callback = registry.default_callback();
        let resolved = resolve_callback(None, None, &registry);
        assert!(Arc::ptr_eq(&resolved, &registry_callback));
    }
}
