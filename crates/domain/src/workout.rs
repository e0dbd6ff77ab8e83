use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ExerciseId;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    #[default]
    Idle,
    Running,
}

/// Elapsed-time counter for a workout. The timer itself has no notion of
/// wall-clock time: a driver calls [`SessionTimer::tick`] once per elapsed
/// second while the timer is running.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimer {
    elapsed_seconds: u32,
    state: TimerState,
}

impl SessionTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn start(&mut self) {
        self.state = TimerState::Running;
    }

    pub fn pause(&mut self) {
        self.state = TimerState::Idle;
    }

    pub fn reset(&mut self) {
        self.elapsed_seconds = 0;
        self.state = TimerState::Idle;
    }

    /// Advances the elapsed time by one second if the timer is running.
    pub fn tick(&mut self) {
        if self.is_running() {
            self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        }
    }
}

/// Record of one completed timed set. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub exercise_id: ExerciseId,
    pub duration_seconds: u32,
    pub completed_at: DateTime<Utc>,
}

/// A workout in progress: a timer plus the sets committed so far. Lives in
/// session memory only and is discarded with its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSession {
    pub name: String,
    timer: SessionTimer,
    sets: Vec<WorkoutSet>,
}

impl WorkoutSession {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            timer: SessionTimer::new(),
            sets: Vec::new(),
        }
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.timer.elapsed_seconds()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    #[must_use]
    pub fn sets(&self) -> &[WorkoutSet] {
        &self.sets
    }

    pub fn start(&mut self) {
        self.timer.start();
    }

    pub fn pause(&mut self) {
        self.timer.pause();
    }

    pub fn reset(&mut self) {
        self.timer.reset();
    }

    pub fn tick(&mut self) {
        self.timer.tick();
    }

    /// Captures the current timer reading as a completed set for `exercise_id`
    /// and resets the timer.
    pub fn commit(&mut self, exercise_id: ExerciseId) -> WorkoutSet {
        let set = WorkoutSet {
            exercise_id,
            duration_seconds: self.timer.elapsed_seconds(),
            completed_at: Utc::now(),
        };
        self.sets.push(set.clone());
        self.timer.reset();
        set
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ticks(timer: &mut SessionTimer, seconds: u32) {
        for _ in 0..seconds {
            timer.tick();
        }
    }

    #[test]
    fn test_timer_starts_idle_at_zero() {
        let timer = SessionTimer::new();
        assert_eq!(timer.elapsed_seconds(), 0);
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn test_timer_advances_only_while_running() {
        let mut timer = SessionTimer::new();
        ticks(&mut timer, 5);
        assert_eq!(timer.elapsed_seconds(), 0);

        timer.start();
        ticks(&mut timer, 3);
        assert_eq!(timer.elapsed_seconds(), 3);

        timer.pause();
        ticks(&mut timer, 5);
        assert_eq!(timer.elapsed_seconds(), 3);
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn test_timer_start_is_idempotent() {
        let mut timer = SessionTimer::new();
        timer.start();
        ticks(&mut timer, 2);
        timer.start();
        ticks(&mut timer, 2);
        assert_eq!(timer.elapsed_seconds(), 4);
        assert!(timer.is_running());
    }

    #[test]
    fn test_timer_pause_when_idle_is_noop() {
        let mut timer = SessionTimer::new();
        timer.start();
        ticks(&mut timer, 2);
        timer.pause();
        timer.pause();
        assert_eq!(timer.elapsed_seconds(), 2);
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn test_timer_reset() {
        let mut timer = SessionTimer::new();
        timer.start();
        ticks(&mut timer, 7);
        timer.reset();
        assert_eq!(timer.elapsed_seconds(), 0);
        assert_eq!(timer.state(), TimerState::Idle);

        timer.reset();
        assert_eq!(timer.elapsed_seconds(), 0);
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn test_session_commit_appends_set_and_resets_timer() {
        let mut session = WorkoutSession::new("Morning Workout");
        session.start();
        for _ in 0..45 {
            session.tick();
        }

        let set = session.commit("0001".into());

        assert_eq!(set.exercise_id, "0001".into());
        assert_eq!(set.duration_seconds, 45);
        assert_eq!(session.sets(), [set]);
        assert_eq!(session.elapsed_seconds(), 0);
        assert!(!session.is_running());
    }

    #[test]
    fn test_session_commit_at_zero_records_zero_duration_set() {
        let mut session = WorkoutSession::new("Morning Workout");
        let set = session.commit("0001".into());
        assert_eq!(set.duration_seconds, 0);
        assert_eq!(session.sets().len(), 1);
    }

    #[test]
    fn test_session_accumulates_sets_in_order() {
        let mut session = WorkoutSession::new("Morning Workout");
        session.start();
        session.tick();
        session.commit("0001".into());
        session.start();
        session.tick();
        session.tick();
        session.commit("0002".into());

        assert_eq!(
            session
                .sets()
                .iter()
                .map(|s| (s.exercise_id.clone(), s.duration_seconds))
                .collect::<Vec<_>>(),
            vec![("0001".into(), 1), ("0002".into(), 2)]
        );
    }
}
