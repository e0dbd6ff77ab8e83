use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use forma_domain::StorageError;
use tokio::fs;
use tokio::sync::Mutex;

use crate::KeyValueStore;

/// Persistent store holding all entries as a single JSON object file.
///
/// Writes serialize through an internal lock, so concurrent mutations never
/// lose each other's updates.
pub struct FileStore {
    path: PathBuf,
    mutation: Mutex<()>,
}

impl FileStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            mutation: Mutex::new(()),
        }
    }

    async fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(StorageError::Other(Box::new(err))),
        };
        serde_json::from_str(&json).map_err(|err| StorageError::Other(Box::new(err)))
    }

    async fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(entries).map_err(|err| StorageError::Other(Box::new(err)))?;
        fs::write(&self.path, json)
            .await
            .map_err(|err| StorageError::Other(Box::new(err)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let _guard = self.mutation.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value);
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.mutation.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries).await?;
        }
        Ok(())
    }
}
