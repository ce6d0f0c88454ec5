use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info};

use super::RouteStore;
use crate::error::StoreError;
use crate::{RouteData, RouteTable};

/// Durable route table backed by an embedded key-value database.
///
/// One backend entry per route: the key is the path bytes, the value is the
/// JSON-serialized record. The store owns the database handle for its
/// lifetime; the backend's file lock keeps a second instance from opening
/// the same path. Writes resolve only after the backend acknowledges the
/// flush to disk.
pub struct ExternalStore {
    db: sled::Db,
    db_path: PathBuf,
}

impl ExternalStore {
    /// Open or create the route database at `db_path`.
    #[tracing::instrument(level = "info", skip_all, fields(db_path = %db_path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self, StoreError> {
        let db = sled::open(db_path.as_ref())
            .map_err(|e| StoreError::from_backend_error(e, "open route database"))?;

        info!(
            "Opened route database with {} existing routes: {}",
            db.len(),
            db_path.as_ref().display()
        );

        Ok(ExternalStore {
            db,
            db_path: db_path.as_ref().to_path_buf(),
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn decode(path: &str, bytes: &[u8]) -> Result<RouteData, StoreError> {
        serde_json::from_slice(bytes).map_err(|e| StoreError::DataCorruption {
            context: format!("decode route '{path}'"),
            details: e.to_string(),
        })
    }

    fn read(&self, path: &str) -> Result<Option<RouteData>, StoreError> {
        match self
            .db
            .get(path.as_bytes())
            .map_err(|e| StoreError::from_backend_read_error(e, "read route"))?
        {
            Some(bytes) => Ok(Some(Self::decode(path, &bytes)?)),
            None => Ok(None),
        }
    }

    fn write(&self, path: &str, data: &RouteData) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(data)
            .map_err(|e| StoreError::from_serialization_error(e, &format!("encode route '{path}'")))?;
        self.db
            .insert(path.as_bytes(), bytes)
            .map_err(|e| StoreError::from_backend_error(e, "write route"))?;
        Ok(())
    }

    /// Completion gate for mutations: waits for the backend to make the
    /// write durable before the operation resolves.
    async fn flush(&self, context: &str) -> Result<(), StoreError> {
        self.db
            .flush_async()
            .await
            .map_err(|e| StoreError::from_backend_error(e, context))?;
        Ok(())
    }
}

#[async_trait]
impl RouteStore for ExternalStore {
    async fn get(&self, path: &str) -> Result<Option<RouteData>, StoreError> {
        self.read(path)
    }

    async fn get_all(&self) -> Result<RouteTable, StoreError> {
        let mut routes = RouteTable::new();
        for entry in self.db.iter() {
            let (key, value) =
                entry.map_err(|e| StoreError::from_backend_read_error(e, "scan route table"))?;
            let path =
                String::from_utf8(key.to_vec()).map_err(|e| StoreError::DataCorruption {
                    context: "scan route table".to_string(),
                    details: format!("non-UTF-8 route key: {e}"),
                })?;
            let data = Self::decode(&path, &value)?;
            routes.insert(path, data);
        }
        Ok(routes)
    }

    async fn add(&self, path: &str, data: RouteData) -> Result<(), StoreError> {
        self.write(path, &data)?;
        self.flush("add route").await?;
        debug!("Added route for {path}");
        Ok(())
    }

    async fn update(&self, path: &str, partial: RouteData) -> Result<(), StoreError> {
        // Read-modify-write; a missing record merges into an empty one.
        let mut data = self.read(path)?.unwrap_or_default();
        for (field, value) in partial {
            data.insert(field, value);
        }
        self.write(path, &data)?;
        self.flush("update route").await
    }

    async fn remove(&self, path: &str) -> Result<(), StoreError> {
        self.db
            .remove(path.as_bytes())
            .map_err(|e| StoreError::from_backend_error(e, "remove route"))?;
        self.flush("remove route").await
    }

    async fn has_route(&self, path: &str) -> Result<bool, StoreError> {
        self.db
            .contains_key(path.as_bytes())
            .map_err(|e| StoreError::from_backend_read_error(e, "check route"))
    }
}
