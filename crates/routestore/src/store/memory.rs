use super::RouteStore;
use crate::error::StoreError;
use crate::{RouteData, RouteTable};
use async_trait::async_trait;
use parking_lot::RwLock;

/// Process-local route table. Holds its mapping directly; no persistence,
/// so the table's lifetime is the store's lifetime.
#[derive(Debug, Default)]
pub struct MemoryStore {
    routes: RwLock<RouteTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            routes: RwLock::new(RouteTable::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.routes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.read().is_empty()
    }
}

#[async_trait]
impl RouteStore for MemoryStore {
    async fn get(&self, path: &str) -> Result<Option<RouteData>, StoreError> {
        Ok(self.routes.read().get(path).cloned())
    }

    async fn get_all(&self) -> Result<RouteTable, StoreError> {
        Ok(self.routes.read().clone())
    }

    async fn add(&self, path: &str, data: RouteData) -> Result<(), StoreError> {
        self.routes.write().insert(path.to_string(), data);
        Ok(())
    }

    async fn update(&self, path: &str, partial: RouteData) -> Result<(), StoreError> {
        let mut routes = self.routes.write();
        let data = routes.entry(path.to_string()).or_default();
        for (field, value) in partial {
            data.insert(field, value);
        }
        Ok(())
    }

    async fn remove(&self, path: &str) -> Result<(), StoreError> {
        self.routes.write().remove(path);
        Ok(())
    }

    async fn has_route(&self, path: &str) -> Result<bool, StoreError> {
        Ok(self.routes.read().contains_key(path))
    }
}
