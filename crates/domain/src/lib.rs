#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod exercise;
mod favorites;
mod service;
mod statistics;
mod workout;

pub use error::{ReadError, StorageError, WriteError};
pub use exercise::{
    BodyPart, CatalogRepository, CatalogService, Exercise, ExerciseFilter, ExerciseId,
    group_by_body_part,
};
pub use favorites::{FavoritesRepository, FavoritesService, with_favorite, without_favorite};
pub use service::Service;
pub use statistics::{WorkoutStats, top_exercises, workout_stats};
pub use workout::{SessionTimer, TimerState, WorkoutSession, WorkoutSet};
