//! Search core: grid access, query methods, callbacks, the defaults registry,
//! resolution, the match engine and the per-grid controller.

pub mod callback;
pub mod controller;
pub mod engine;
pub mod grid;
pub mod lifecycle;
pub mod method;
pub mod registry;
pub mod resolver;
pub mod state;
pub mod value;

pub use callback::{CallbackRef, DEFAULT_CALLBACK, DefaultCallback, ResultCallback, SearchOwner};
pub use controller::{
    DEFAULT_SEARCH_RESULT_CLASS, QueryOverrides, SearchController, SearchOptions,
};
pub use engine::{MatchEngine, ScanSummary};
pub use grid::{DataGrid, GridSource};
pub use lifecycle::{SearchFeature, SearchSetting, SearchSettingOptions};
pub use method::{
    BuiltinQueryMethod, DEFAULT_QUERY_METHOD, DefaultQueryMethod, EXACT_QUERY_METHOD,
    ExactQueryMethod, Fallible, QueryMethod, QueryMethodRef,
};
pub use registry::DefaultsRegistry;
pub use state::{MatchState, SearchResult};
