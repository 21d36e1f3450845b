//! Query methods: the predicate deciding whether one cell matches a query.

use super::value::cell_text;
use crate::error::HookError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Decides whether a cell value matches a query value.
pub trait QueryMethod: Send + Sync {
    fn matches(&self, query: &Value, value: &Value) -> Result<bool, HookError>;
}

/// Shared handle to a query method.
pub type QueryMethodRef = Arc<dyn QueryMethod>;

impl<F> QueryMethod for F
where
    F: Fn(&Value, &Value) -> bool + Send + Sync,
{
    fn matches(&self, query: &Value, value: &Value) -> Result<bool, HookError> {
        Ok(self(query, value))
    }
}

/// Adapts a closure that may fail into a hook.
///
/// Works for both query methods and result callbacks.
pub struct Fallible<F>(pub F);

impl<F> QueryMethod for Fallible<F>
where
    F: Fn(&Value, &Value) -> Result<bool, HookError> + Send + Sync,
{
    fn matches(&self, query: &Value, value: &Value) -> Result<bool, HookError> {
        (self.0)(query, value)
    }
}

/// Case-insensitive literal substring match.
///
/// A query that is not a string, or is empty, matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultQueryMethod;

pub const DEFAULT_QUERY_METHOD: DefaultQueryMethod = DefaultQueryMethod;

impl QueryMethod for DefaultQueryMethod {
    fn matches(&self, query: &Value, value: &Value) -> Result<bool, HookError> {
        let Some(needle) = query_text(query) else {
            return Ok(false);
        };
        Ok(cell_text(value).to_lowercase().contains(&needle))
    }
}

/// Case-insensitive whole-value equality, with the same query rules as
/// [`DefaultQueryMethod`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactQueryMethod;

pub const EXACT_QUERY_METHOD: ExactQueryMethod = ExactQueryMethod;

impl QueryMethod for ExactQueryMethod {
    fn matches(&self, query: &Value, value: &Value) -> Result<bool, HookError> {
        let Some(needle) = query_text(query) else {
            return Ok(false);
        };
        Ok(cell_text(value).to_lowercase() == needle)
    }
}

fn query_text(query: &Value) -> Option<String> {
    match query {
        Value::String(text) if !text.is_empty() => Some(text.to_lowercase()),
        _ => None,
    }
}

/// Built-in query methods selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinQueryMethod {
    #[default]
    Contains,
    Exact,
}

impl BuiltinQueryMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinQueryMethod::Contains => "contains",
            BuiltinQueryMethod::Exact => "exact",
        }
    }

    pub fn to_method(self) -> QueryMethodRef {
        match self {
            BuiltinQueryMethod::Contains => Arc::new(DEFAULT_QUERY_METHOD),
            BuiltinQueryMethod::Exact => Arc::new(EXACT_QUERY_METHOD),
        }
    }
}

impl fmt::Display for BuiltinQueryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuiltinQueryMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "contains" => Ok(BuiltinQueryMethod::Contains),
            "exact" => Ok(BuiltinQueryMethod::Exact),
            other => Err(format!(
                "unknown query method '{}' (expected 'contains' or 'exact')",
                other
            )),
        }
    }
}
