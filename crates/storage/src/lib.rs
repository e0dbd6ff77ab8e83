#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use async_trait::async_trait;
use forma_domain::StorageError;

mod favorites;
mod file;
mod memory;
mod rest;
mod settings;

pub use favorites::Favorites;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use rest::{ExerciseDb, ReqwestSendRequest, Response, SendRequest};
pub use settings::UserSettings;

/// String-keyed storage for small JSON-encoded values.
#[async_trait]
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
