use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{ExerciseId, WorkoutSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutStats {
    /// Number of days with at least one committed set.
    pub total_workouts: usize,
    pub total_sets: usize,
    pub total_seconds: u64,
    /// Consecutive days with at least one set, counting back from `today`.
    /// A day without sets so far today does not break the streak.
    pub streak_days: u32,
    /// Minutes per day for the trailing week, oldest first, zero-filled.
    pub weekly_minutes: Vec<(NaiveDate, u32)>,
}

#[must_use]
pub fn workout_stats(sets: &[WorkoutSet], today: NaiveDate) -> WorkoutStats {
    let mut seconds_per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for set in sets {
        *seconds_per_day
            .entry(set.completed_at.date_naive())
            .or_insert(0) += u64::from(set.duration_seconds);
    }

    let mut streak_days = 0;
    let mut day = if seconds_per_day.contains_key(&today) {
        Some(today)
    } else {
        today.pred_opt()
    };
    while let Some(d) = day {
        if !seconds_per_day.contains_key(&d) {
            break;
        }
        streak_days += 1;
        day = d.pred_opt();
    }

    let weekly_minutes = (0..7)
        .rev()
        .filter_map(|i| today.checked_sub_days(chrono::Days::new(i)))
        .map(|date| {
            let seconds = seconds_per_day.get(&date).copied().unwrap_or(0);
            (date, u32::try_from(seconds / 60).unwrap_or(u32::MAX))
        })
        .collect();

    WorkoutStats {
        total_workouts: seconds_per_day.len(),
        total_sets: sets.len(),
        total_seconds: sets.iter().map(|s| u64::from(s.duration_seconds)).sum(),
        streak_days,
        weekly_minutes,
    }
}

/// The `count` most-performed exercises, ordered by descending set count.
/// Ties are broken by identifier for a stable result.
#[must_use]
pub fn top_exercises(sets: &[WorkoutSet], count: usize) -> Vec<(ExerciseId, usize)> {
    let mut counts: BTreeMap<&ExerciseId, usize> = BTreeMap::new();
    for set in sets {
        *counts.entry(&set.exercise_id).or_insert(0) += 1;
    }
    let mut result = counts
        .into_iter()
        .map(|(id, n)| (id.clone(), n))
        .collect::<Vec<_>>();
    result.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    result.truncate(count);
    result
}
