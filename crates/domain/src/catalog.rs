//! Built-in sample exercises.
//!
//! The remote exercise database is the authoritative catalog. This module
//! provides a small bundled subset so the catalog remains usable without a
//! connection.

use crate::{BodyPart, Exercise, ExerciseId};

pub struct SampleExercise {
    pub id: &'static str,
    pub name: &'static str,
    pub body_part: BodyPart,
    pub target: &'static str,
    pub equipment: &'static str,
    pub instructions: &'static [&'static str],
}

impl From<&SampleExercise> for Exercise {
    fn from(value: &SampleExercise) -> Self {
        Exercise {
            id: value.id.into(),
            name: value.name.to_string(),
            body_part: value.body_part,
            target: value.target.to_string(),
            equipment: value.equipment.to_string(),
            instructions: value.instructions.iter().map(ToString::to_string).collect(),
            gif_url: None,
        }
    }
}

#[must_use]
pub fn samples() -> Vec<Exercise> {
    EXERCISES.iter().map(Exercise::from).collect()
}

#[must_use]
pub fn sample_by_id(id: &ExerciseId) -> Option<Exercise> {
    EXERCISES
        .iter()
        .find(|e| e.id == id.as_ref())
        .map(Exercise::from)
}

pub static EXERCISES: [SampleExercise; 12] = [
    SampleExercise {
        id: "0001",
        name: "Push-ups",
        body_part: BodyPart::Chest,
        target: "pectorals",
        equipment: "body weight",
        instructions: &[
            "Start in a plank position with hands slightly wider than shoulder-width apart",
            "Lower your body until chest nearly touches the floor",
            "Pause, then push yourself back up",
            "Repeat for desired repetitions",
        ],
    },
    SampleExercise {
        id: "0002",
        name: "Bench Press",
        body_part: BodyPart::Chest,
        target: "pectorals",
        equipment: "barbell",
        instructions: &[
            "Lie flat on a bench with feet firmly planted on the ground",
            "Grab the barbell with hands slightly wider than shoulder-width",
            "Lower the bar to your mid-chest",
            "Press the bar back up explosively",
            "Lock out at the top without hyperextending elbows",
        ],
    },
    SampleExercise {
        id: "0003",
        name: "Pull-ups",
        body_part: BodyPart::Back,
        target: "lats",
        equipment: "body weight",
        instructions: &[
            "Grab the pull-up bar with palms facing away",
            "Hang with arms fully extended",
            "Pull your body up until chin is above the bar",
            "Lower yourself back down with control",
            "Repeat for desired repetitions",
        ],
    },
    SampleExercise {
        id: "0004",
        name: "Lat Pulldown",
        body_part: BodyPart::Back,
        target: "lats",
        equipment: "cable",
        instructions: &[
            "Sit with thighs under the pads and grab the bar with wide overhand grip",
            "Lean back slightly and pull the bar to your chest",
            "Squeeze your shoulder blades together at the bottom",
            "Slowly return to starting position",
            "Repeat for desired repetitions",
        ],
    },
    SampleExercise {
        id: "0005",
        name: "Bicep Curls",
        body_part: BodyPart::UpperArms,
        target: "biceps",
        equipment: "dumbbell",
        instructions: &[
            "Stand upright with dumbbells at your sides",
            "Keeping elbows stationary, curl weights up toward shoulders",
            "Rotate wrists so palms face upward at the top",
            "Slowly lower the weights back to starting position",
            "Repeat for desired repetitions",
        ],
    },
    SampleExercise {
        id: "0006",
        name: "Tricep Dips",
        body_part: BodyPart::UpperArms,
        target: "triceps",
        equipment: "body weight",
        instructions: &[
            "Position yourself between parallel bars and support your weight",
            "Lower your body by bending your elbows to 90 degrees",
            "Push yourself back up to starting position",
            "Keep your body upright throughout the movement",
            "Repeat for desired repetitions",
        ],
    },
    SampleExercise {
        id: "0007",
        name: "Squats",
        body_part: BodyPart::UpperLegs,
        target: "quads",
        equipment: "body weight",
        instructions: &[
            "Stand with feet shoulder-width apart",
            "Lower your body by bending knees and pushing hips back",
            "Descend until thighs are parallel to floor",
            "Drive through heels to return to standing position",
            "Repeat for desired repetitions",
        ],
    },
    SampleExercise {
        id: "0008",
        name: "Leg Press",
        body_part: BodyPart::UpperLegs,
        target: "quads",
        equipment: "leverage machine",
        instructions: &[
            "Sit with back against pad and feet shoulder-width on platform",
            "Release safety handles and lower platform by bending knees",
            "Stop when knees are at 90-degree angle",
            "Press platform back up by extending legs",
            "Repeat for desired repetitions",
        ],
    },
    SampleExercise {
        id: "0009",
        name: "Plank",
        body_part: BodyPart::Waist,
        target: "abs",
        equipment: "body weight",
        instructions: &[
            "Start in a push-up position but rest on forearms",
            "Keep body straight from head to heels",
            "Engage core and hold position",
            "Keep neck neutral by looking at floor",
            "Hold for desired time",
        ],
    },
    SampleExercise {
        id: "0010",
        name: "Russian Twists",
        body_part: BodyPart::Waist,
        target: "abs",
        equipment: "medicine ball",
        instructions: &[
            "Sit on floor with knees bent and lean back slightly",
            "Hold medicine ball with both hands",
            "Twist torso to right and tap ball on floor",
            "Return to center and twist to left side",
            "Continue alternating for desired repetitions",
        ],
    },
    SampleExercise {
        id: "0011",
        name: "Shoulder Press",
        body_part: BodyPart::Shoulders,
        target: "delts",
        equipment: "dumbbell",
        instructions: &[
            "Sit on bench with back support and dumbbells at shoulder height",
            "Press weights upward until arms are fully extended",
            "Pause at the top, then slowly lower back to start",
            "Keep core tight throughout the movement",
            "Repeat for desired repetitions",
        ],
    },
    SampleExercise {
        id: "0012",
        name: "Lateral Raises",
        body_part: BodyPart::Shoulders,
        target: "delts",
        equipment: "dumbbell",
        instructions: &[
            "Stand with dumbbells at sides, palms facing inward",
            "Raise arms out to sides until parallel with floor",
            "Pause at the top, then slowly lower back to start",
            "Keep slight bend in elbows throughout",
            "Repeat for desired repetitions",
        ],
    },
];
