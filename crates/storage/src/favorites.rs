use forma_domain::{
    ExerciseId, FavoritesRepository, ReadError, WriteError, with_favorite, without_favorite,
};
use log::warn;
use tokio::sync::Mutex;

use crate::KeyValueStore;

const KEY_FAVORITES: &str = "favorite_exercises";

/// Favorites persisted as a JSON array of exercise identifiers under a
/// single key.
///
/// Mutations read, modify and write back the whole list. An internal lock
/// serializes them, so concurrent additions and removals never lose each
/// other's updates. Reads are not serialized and may observe the state
/// before or after an in-flight mutation.
pub struct Favorites<S> {
    store: S,
    mutation: Mutex<()>,
}

impl<S: KeyValueStore> Favorites<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            mutation: Mutex::new(()),
        }
    }

    async fn read(&self) -> Result<Vec<ExerciseId>, ReadError> {
        match self.store.get(KEY_FAVORITES).await? {
            Some(json) => match serde_json::from_str(&json) {
                Ok(favorites) => Ok(favorites),
                Err(err) => {
                    warn!("treating unreadable favorites as empty: {err}");
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    async fn write(&self, favorites: &[ExerciseId]) -> Result<(), WriteError> {
        let json =
            serde_json::to_string(favorites).map_err(|err| WriteError::Other(Box::new(err)))?;
        Ok(self.store.set(KEY_FAVORITES, json).await?)
    }
}

impl<S: KeyValueStore> FavoritesRepository for Favorites<S> {
    async fn read_favorites(&self) -> Result<Vec<ExerciseId>, ReadError> {
        self.read().await
    }

    async fn add_favorite(&self, id: &ExerciseId) -> Result<(), WriteError> {
        let _guard = self.mutation.lock().await;
        let favorites = self.read().await?;
        let updated = with_favorite(favorites.clone(), id);
        if updated != favorites {
            self.write(&updated).await?;
        }
        Ok(())
    }

    async fn remove_favorite(&self, id: &ExerciseId) -> Result<(), WriteError> {
        let _guard = self.mutation.lock().await;
        let favorites = self.read().await?;
        let updated = without_favorite(favorites.clone(), id);
        if updated != favorites {
            self.write(&updated).await?;
        }
        Ok(())
    }
}
