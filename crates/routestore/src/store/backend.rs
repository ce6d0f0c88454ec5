use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{ExternalStore, MemoryStore, RouteStore};
use crate::error::StoreError;

/// Selects which implementation backs the route table.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    Memory,
    External { db_path: PathBuf },
}

impl StoreBackend {
    pub fn new_memory() -> Self {
        StoreBackend::Memory
    }

    pub fn new_external<P: AsRef<Path>>(db_path: P) -> Self {
        StoreBackend::External {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    /// Construct the selected store. Only the external backend can fail,
    /// when the database cannot be opened.
    pub fn create(&self) -> Result<Arc<dyn RouteStore>, StoreError> {
        match self {
            StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
            StoreBackend::External { db_path } => Ok(Arc::new(ExternalStore::open(db_path)?)),
        }
    }
}
