use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use forma_domain::{ExerciseId, WorkoutSession, WorkoutSet};
use tokio::task::JoinHandle;
use tokio::time;

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A workout session driven by a background one-second ticker.
///
/// The ticker task advances the timer only while it is running, so starting
/// and pausing are controlled entirely through the session state. Dropping
/// the workout cancels the ticker.
pub struct ActiveWorkout {
    session: Arc<Mutex<WorkoutSession>>,
    ticker: JoinHandle<()>,
}

impl ActiveWorkout {
    /// Creates a workout and spawns its ticker task.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let session = Arc::new(Mutex::new(WorkoutSession::new(name)));
        let ticker = tokio::spawn(tick_loop(Arc::clone(&session)));
        Self { session, ticker }
    }

    pub fn start(&self) {
        self.session().start();
    }

    pub fn pause(&self) {
        self.session().pause();
    }

    pub fn reset(&self) {
        self.session().reset();
    }

    pub fn commit(&self, exercise_id: ExerciseId) -> WorkoutSet {
        self.session().commit(exercise_id)
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.session().elapsed_seconds()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.session().is_running()
    }

    #[must_use]
    pub fn sets(&self) -> Vec<WorkoutSet> {
        self.session().sets().to_vec()
    }

    fn session(&self) -> MutexGuard<'_, WorkoutSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for ActiveWorkout {
    fn drop(&mut self) {
        self.ticker.abort();
    }
}

async fn tick_loop(session: Arc<Mutex<WorkoutSession>>) {
    let mut interval = time::interval_at(time::Instant::now() + TICK_PERIOD, TICK_PERIOD);
    loop {
        interval.tick().await;
        session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .tick();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    async fn advance(duration: Duration) {
        time::advance(duration).await;
        settle().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_advances_while_running() {
        let workout = ActiveWorkout::new("Morning Workout");
        settle().await;
        assert_eq!(workout.elapsed_seconds(), 0);
        assert!(!workout.is_running());

        workout.start();
        assert!(workout.is_running());
        advance(Duration::from_secs(3)).await;
        assert_eq!(workout.elapsed_seconds(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_holds_while_paused() {
        let workout = ActiveWorkout::new("Morning Workout");
        settle().await;
        workout.start();
        advance(Duration::from_secs(2)).await;

        workout.pause();
        advance(Duration::from_secs(5)).await;
        assert_eq!(workout.elapsed_seconds(), 2);
        assert!(!workout.is_running());

        workout.start();
        advance(Duration::from_secs(1)).await;
        assert_eq!(workout.elapsed_seconds(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_clears_elapsed_time() {
        let workout = ActiveWorkout::new("Morning Workout");
        workout.start();
        advance(Duration::from_secs(4)).await;

        workout.reset();
        assert_eq!(workout.elapsed_seconds(), 0);
        assert!(!workout.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_commit_records_set_and_resets_timer() {
        let workout = ActiveWorkout::new("Morning Workout");
        settle().await;
        workout.start();
        advance(Duration::from_secs(45)).await;

        let set = workout.commit("0001".into());
        assert_eq!(set.duration_seconds, 45);
        assert_eq!(workout.elapsed_seconds(), 0);
        assert!(!workout.is_running());
        assert_eq!(workout.sets().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_ticker() {
        let workout = ActiveWorkout::new("Morning Workout");
        workout.start();
        let session = Arc::clone(&workout.session);
        drop(workout);

        advance(Duration::from_secs(5)).await;
        let elapsed = session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .elapsed_seconds();
        assert_eq!(elapsed, 0);
    }
}
