use std::collections::{BTreeMap, HashSet};

use derive_more::{AsRef, Display, Into};
use serde::{Deserialize, Serialize};

use crate::ReadError;

#[allow(async_fn_in_trait)]
pub trait CatalogRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn read_exercises_by_body_part(
        &self,
        body_part: BodyPart,
    ) -> Result<Vec<Exercise>, ReadError>;
    async fn read_exercises_by_target(&self, target: &str) -> Result<Vec<Exercise>, ReadError>;
    async fn read_exercises_by_equipment(
        &self,
        equipment: &str,
    ) -> Result<Vec<Exercise>, ReadError>;
    async fn read_exercises_by_name(&self, name: &str) -> Result<Vec<Exercise>, ReadError>;
    async fn read_exercise(&self, id: &ExerciseId) -> Result<Exercise, ReadError>;
    async fn read_body_parts(&self) -> Result<Vec<String>, ReadError>;
    async fn read_equipment(&self) -> Result<Vec<String>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait CatalogService {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn get_exercises_by_body_part(
        &self,
        body_part: BodyPart,
    ) -> Result<Vec<Exercise>, ReadError>;
    async fn get_exercises_by_target(&self, target: &str) -> Result<Vec<Exercise>, ReadError>;
    async fn get_exercises_by_equipment(&self, equipment: &str)
    -> Result<Vec<Exercise>, ReadError>;
    async fn get_exercises_by_name(&self, name: &str) -> Result<Vec<Exercise>, ReadError>;
    async fn get_exercise(&self, id: &ExerciseId) -> Result<Exercise, ReadError>;
    async fn get_body_parts(&self) -> Result<Vec<String>, ReadError>;
    async fn get_equipment(&self) -> Result<Vec<String>, ReadError>;
}

/// Identifier assigned by the exercise catalog. Treated as opaque, the
/// catalog currently uses zero-padded decimal strings such as `"0001"`.
#[derive(
    AsRef,
    Display,
    Into,
    Debug,
    Default,
    Clone,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct ExerciseId(String);

impl From<&str> for ExerciseId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    pub body_part: BodyPart,
    pub target: String,
    pub equipment: String,
    pub instructions: Vec<String>,
    pub gif_url: Option<String>,
}

/// Body parts recognized by the exercise catalog. String representations
/// match the catalog's lowercase identifiers.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BodyPart {
    Back,
    Cardio,
    Chest,
    #[serde(rename = "lower arms")]
    #[strum(serialize = "lower arms")]
    LowerArms,
    #[serde(rename = "lower legs")]
    #[strum(serialize = "lower legs")]
    LowerLegs,
    Neck,
    Shoulders,
    #[serde(rename = "upper arms")]
    #[strum(serialize = "upper arms")]
    UpperArms,
    #[serde(rename = "upper legs")]
    #[strum(serialize = "upper legs")]
    UpperLegs,
    Waist,
}

impl BodyPart {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BodyPart::Back => "Back",
            BodyPart::Cardio => "Cardio",
            BodyPart::Chest => "Chest",
            BodyPart::LowerArms => "Lower Arms",
            BodyPart::LowerLegs => "Lower Legs",
            BodyPart::Neck => "Neck",
            BodyPart::Shoulders => "Shoulders",
            BodyPart::UpperArms => "Upper Arms",
            BodyPart::UpperLegs => "Upper Legs",
            BodyPart::Waist => "Waist",
        }
    }
}

#[derive(Default, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub name: String,
    pub body_parts: HashSet<BodyPart>,
    pub equipment: HashSet<String>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        exercises.filter(|e| self.matches(e)).collect()
    }

    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        exercise
            .name
            .to_lowercase()
            .contains(self.name.to_lowercase().trim())
            && (self.body_parts.is_empty() || self.body_parts.contains(&exercise.body_part))
            && (self.equipment.is_empty()
                || self.equipment.contains(&exercise.equipment.to_lowercase()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.body_parts.is_empty() && self.equipment.is_empty()
    }

    pub fn toggle_body_part(&mut self, body_part: BodyPart) {
        if self.body_parts.contains(&body_part) {
            self.body_parts.remove(&body_part);
        } else {
            self.body_parts.insert(body_part);
        }
    }

    pub fn toggle_equipment(&mut self, equipment: &str) {
        let equipment = equipment.to_lowercase();
        if self.equipment.contains(&equipment) {
            self.equipment.remove(&equipment);
        } else {
            self.equipment.insert(equipment);
        }
    }
}

/// Groups exercises by body part for sectioned display. Order within each
/// group follows the input order.
#[must_use]
pub fn group_by_body_part<'a>(
    exercises: impl Iterator<Item = &'a Exercise>,
) -> BTreeMap<BodyPart, Vec<&'a Exercise>> {
    let mut result: BTreeMap<BodyPart, Vec<&Exercise>> = BTreeMap::new();
    for exercise in exercises {
        result.entry(exercise.body_part).or_default().push(exercise);
    }
    result
}
