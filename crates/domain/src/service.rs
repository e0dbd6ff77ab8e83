use log::{debug, error};
use strum::IntoEnumIterator;

use crate::{
    BodyPart, CatalogRepository, CatalogService, Exercise, ExerciseId, FavoritesRepository,
    FavoritesService, ReadError, StorageError, WriteError, catalog,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

macro_rules! samples_on_no_connection {
    ($func: expr, $samples: expr, $entity: literal) => {{
        match $func.await {
            Err(ReadError::Storage(StorageError::NoConnection)) => {
                debug!(
                    "no connection to exercise catalog, using sample {}",
                    $entity
                );
                Ok($samples)
            }
            Err(err) => {
                error!("failed to get {}: {err}", $entity);
                Err(err)
            }
            Ok(result) => Ok(result),
        }
    }};
}

impl<R: FavoritesRepository> FavoritesService for Service<R> {
    async fn get_favorites(&self) -> Vec<ExerciseId> {
        match self.repository.read_favorites().await {
            Ok(favorites) => favorites,
            Err(err) => {
                error!("failed to get favorites: {err}");
                Vec::new()
            }
        }
    }

    async fn add_favorite(&self, id: &ExerciseId) -> bool {
        log_on_error!(
            self.repository.add_favorite(id),
            WriteError,
            "add",
            "favorite"
        )
        .is_ok()
    }

    async fn remove_favorite(&self, id: &ExerciseId) -> bool {
        log_on_error!(
            self.repository.remove_favorite(id),
            WriteError,
            "remove",
            "favorite"
        )
        .is_ok()
    }

    async fn is_favorite(&self, id: &ExerciseId) -> bool {
        self.get_favorites().await.contains(id)
    }
}

impl<R: CatalogRepository> CatalogService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        samples_on_no_connection!(
            self.repository.read_exercises(),
            catalog::samples(),
            "exercises"
        )
    }

    async fn get_exercises_by_body_part(
        &self,
        body_part: BodyPart,
    ) -> Result<Vec<Exercise>, ReadError> {
        samples_on_no_connection!(
            self.repository.read_exercises_by_body_part(body_part),
            catalog::samples()
                .into_iter()
                .filter(|e| e.body_part == body_part)
                .collect(),
            "exercises by body part"
        )
    }

    async fn get_exercises_by_target(&self, target: &str) -> Result<Vec<Exercise>, ReadError> {
        let target = target.to_lowercase();
        samples_on_no_connection!(
            self.repository.read_exercises_by_target(&target),
            catalog::samples()
                .into_iter()
                .filter(|e| e.target == target)
                .collect(),
            "exercises by target"
        )
    }

    async fn get_exercises_by_equipment(
        &self,
        equipment: &str,
    ) -> Result<Vec<Exercise>, ReadError> {
        let equipment = equipment.to_lowercase();
        samples_on_no_connection!(
            self.repository.read_exercises_by_equipment(&equipment),
            catalog::samples()
                .into_iter()
                .filter(|e| e.equipment == equipment)
                .collect(),
            "exercises by equipment"
        )
    }

    async fn get_exercises_by_name(&self, name: &str) -> Result<Vec<Exercise>, ReadError> {
        let name = name.to_lowercase();
        samples_on_no_connection!(
            self.repository.read_exercises_by_name(&name),
            catalog::samples()
                .into_iter()
                .filter(|e| e.name.to_lowercase().contains(&name))
                .collect(),
            "exercises by name"
        )
    }

    async fn get_exercise(&self, id: &ExerciseId) -> Result<Exercise, ReadError> {
        match self.repository.read_exercise(id).await {
            Err(ReadError::Storage(StorageError::NoConnection)) => {
                debug!("no connection to exercise catalog, looking up sample exercise");
                catalog::sample_by_id(id)
                    .ok_or(ReadError::Storage(StorageError::NoConnection))
            }
            Err(err) => {
                if matches!(err, ReadError::NotFound) {
                    debug!("exercise {id} not found");
                } else {
                    error!("failed to get exercise {id}: {err}");
                }
                Err(err)
            }
            Ok(exercise) => Ok(exercise),
        }
    }

    async fn get_body_parts(&self) -> Result<Vec<String>, ReadError> {
        samples_on_no_connection!(
            self.repository.read_body_parts(),
            BodyPart::iter().map(|b| b.to_string()).collect(),
            "body parts"
        )
    }

    async fn get_equipment(&self) -> Result<Vec<String>, ReadError> {
        samples_on_no_connection!(
            self.repository.read_equipment(),
            {
                let mut equipment = catalog::samples()
                    .into_iter()
                    .map(|e| e.equipment)
                    .collect::<Vec<_>>();
                equipment.sort_unstable();
                equipment.dedup();
                equipment
            },
            "equipment"
        )
    }
}
