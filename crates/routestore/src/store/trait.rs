//! The store contract shared by the memory and external backends.

use crate::error::StoreError;
use crate::{RouteData, RouteTable, RouteTarget};
use async_trait::async_trait;

/// Uniform interface over the route table backends.
///
/// Both the in-memory table and the persistent external table implement this
/// trait, so callers pick a backend at construction time and never branch on
/// it again. Absence is never an error: lookups report it as `Ok(None)` or
/// `Ok(false)`, and an `Err` always means the backend itself failed. Each
/// operation resolves exactly once, with failures delivered through the same
/// `Result` as successes.
#[async_trait]
pub trait RouteStore: Send + Sync {
    /// Fetch the record stored at `path`, or `None` when no record exists.
    /// Exact key match only; no prefix or partial matching.
    async fn get(&self, path: &str) -> Result<Option<RouteData>, StoreError>;

    /// Fetch the record at `path` paired with its prefix, shaped for
    /// request-dispatch logic.
    async fn get_target(&self, path: &str) -> Result<Option<RouteTarget>, StoreError> {
        Ok(self
            .get(path)
            .await?
            .map(|data| RouteTarget::new(path, data)))
    }

    /// Snapshot every stored path/record pair. An empty store yields an
    /// empty map, never an error.
    async fn get_all(&self) -> Result<RouteTable, StoreError>;

    /// Insert or unconditionally overwrite the record at `path`. Resolves
    /// only once the write is visible to subsequent reads, and durable for
    /// the external backend.
    async fn add(&self, path: &str, data: RouteData) -> Result<(), StoreError>;

    /// Shallow-merge `partial` into the record at `path`: supplied fields
    /// overwrite the stored ones, fields absent from `partial` are
    /// preserved. A path with no record is treated as holding an empty
    /// record, so the merge creates it.
    async fn update(&self, path: &str, partial: RouteData) -> Result<(), StoreError>;

    /// Delete the record at `path`. Removing a path with no record is a
    /// no-op, not an error.
    async fn remove(&self, path: &str) -> Result<(), StoreError>;

    /// Whether a record currently exists at `path`. Cheaper than `get` where
    /// the backend offers an existence check that skips deserialization.
    async fn has_route(&self, path: &str) -> Result<bool, StoreError>;
}
