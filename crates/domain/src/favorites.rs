use crate::{ExerciseId, ReadError, WriteError};

#[allow(async_fn_in_trait)]
pub trait FavoritesRepository {
    async fn read_favorites(&self) -> Result<Vec<ExerciseId>, ReadError>;
    async fn add_favorite(&self, id: &ExerciseId) -> Result<(), WriteError>;
    async fn remove_favorite(&self, id: &ExerciseId) -> Result<(), WriteError>;
}

/// Favorites are a convenience feature. Failures are reported but never
/// propagate to the caller, so all operations are infallible at this
/// boundary.
#[allow(async_fn_in_trait)]
pub trait FavoritesService {
    async fn get_favorites(&self) -> Vec<ExerciseId>;
    async fn add_favorite(&self, id: &ExerciseId) -> bool;
    async fn remove_favorite(&self, id: &ExerciseId) -> bool;
    async fn is_favorite(&self, id: &ExerciseId) -> bool;
}

/// Returns the favorites with `id` appended, unless it is already a member.
#[must_use]
pub fn with_favorite(mut favorites: Vec<ExerciseId>, id: &ExerciseId) -> Vec<ExerciseId> {
    if !favorites.contains(id) {
        favorites.push(id.clone());
    }
    favorites
}

/// Returns the favorites with all occurrences of `id` removed.
#[must_use]
pub fn without_favorite(mut favorites: Vec<ExerciseId>, id: &ExerciseId) -> Vec<ExerciseId> {
    favorites.retain(|f| f != id);
    favorites
}
