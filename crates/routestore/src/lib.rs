use std::collections::BTreeMap;

pub mod error;
pub mod store;
pub mod telemetry;

pub use error::StoreError;
pub use store::{ExternalStore, MemoryStore, RouteStore, StoreBackend};

// Re-export logging macros for consistent usage across the crate
pub use log::{debug, error, info, trace, warn};

// =============================================================================
// CORE DATA STRUCTURES
// =============================================================================

/// Arbitrary route metadata: a string-keyed mapping whose values may be any
/// JSON value, including nested maps and arrays. Routes carry no fixed schema.
pub type RouteData = serde_json::Map<String, serde_json::Value>;

/// A snapshot of every path/record pair held by a store.
pub type RouteTable = BTreeMap<String, RouteData>;

/// A route paired with the prefix it was stored under, shaped for consumption
/// by request-dispatch logic.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RouteTarget {
    pub prefix: String,
    pub data: RouteData,
}

impl RouteTarget {
    pub fn new(prefix: impl Into<String>, data: RouteData) -> Self {
        Self {
            prefix: prefix.into(),
            data,
        }
    }
}
