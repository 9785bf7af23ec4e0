use chrono::{DateTime, Duration, Utc};

use crate::core::kinematics::Trajectory;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing,
    Paused,
    Completed,
}

/// The `(cursor, phase)` pair every public operation reports back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub cursor: usize,
    pub phase: Phase,
}

/// Result of one [`Playback::advance`] poll. `just_completed` is true on
/// exactly one advance per play session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    pub cursor: usize,
    pub phase: Phase,
    pub just_completed: bool,
}

/// Replays a trajectory against wall-clock time.
///
/// The host polls [`advance`](Playback::advance) with the current time at
/// whatever cadence it redraws; one real second always maps to one
/// simulated second. The cursor is recomputed from the elapsed time on
/// every poll, so the controller is correct at any callback frequency and
/// idempotent for a given `(phase, anchor, now)`.
pub struct Playback {
    trajectory: Option<Trajectory>,
    cursor: usize,
    phase: Phase,
    clock_anchor: Option<DateTime<Utc>>,
    completion_raised: bool,
}

impl Playback {
    pub fn new() -> Self {
        Self {
            trajectory: None,
            cursor: 0,
            phase: Phase::Idle,
            clock_anchor: None,
            completion_raised: false,
        }
    }

    pub fn with_trajectory(trajectory: Trajectory) -> Self {
        let mut playback = Self::new();
        playback.load(trajectory);
        playback
    }

    /// Replace the trajectory. Invalidates the running session entirely:
    /// a stale cursor must never index into the new buffer.
    pub fn load(&mut self, trajectory: Trajectory) {
        self.trajectory = Some(trajectory);
        self.reset();
    }

    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_ref()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cursor: self.cursor,
            phase: self.phase,
        }
    }

    /// Begin a fresh session from `Idle`/`Completed`, or resume from
    /// `Paused` with the anchor rewound so no simulated time is skipped.
    pub fn start(&mut self, now: DateTime<Utc>) -> Snapshot {
        if self.trajectory.is_none() {
            return self.snapshot();
        }
        match self.phase {
            Phase::Idle | Phase::Completed => {
                self.cursor = 0;
                self.completion_raised = false;
                self.clock_anchor = Some(now);
                self.phase = Phase::Playing;
            }
            Phase::Paused => {
                let frozen_t = self.current_sample_time();
                self.clock_anchor = Some(now - seconds_to_duration(frozen_t));
                self.phase = Phase::Playing;
            }
            Phase::Playing => {}
        }
        self.snapshot()
    }

    pub fn pause(&mut self) -> Snapshot {
        if self.phase == Phase::Playing {
            self.phase = Phase::Paused;
        }
        self.snapshot()
    }

    pub fn reset(&mut self) -> Snapshot {
        self.cursor = 0;
        self.phase = Phase::Idle;
        self.clock_anchor = None;
        self.completion_raised = false;
        self.snapshot()
    }

    /// Advance the cursor to match the wall clock. A no-op unless playing;
    /// polling without a loaded trajectory is tolerated and does nothing.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Advance {
        let Some(trajectory) = self.trajectory.as_ref() else {
            return self.advance_result(false);
        };
        if self.phase != Phase::Playing {
            return self.advance_result(false);
        }
        let Some(anchor) = self.clock_anchor else {
            return self.advance_result(false);
        };

        let elapsed = duration_to_seconds(now - anchor).max(0.0);
        let samples = trajectory.samples();
        let index = samples.partition_point(|sample| sample.t < elapsed);

        if index >= samples.len() {
            self.cursor = samples.len() - 1;
            self.phase = Phase::Completed;
            let first_time = !self.completion_raised;
            self.completion_raised = true;
            return self.advance_result(first_time);
        }

        self.cursor = index;
        self.advance_result(false)
    }

    fn advance_result(&self, just_completed: bool) -> Advance {
        Advance {
            cursor: self.cursor,
            phase: self.phase,
            just_completed,
        }
    }

    fn current_sample_time(&self) -> f64 {
        self.trajectory
            .as_ref()
            .map_or(0.0, |trajectory| trajectory.sample(self.cursor).t)
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}

fn seconds_to_duration(seconds: f64) -> Duration {
    Duration::milliseconds((seconds * 1000.0).round() as i64)
}

fn duration_to_seconds(duration: Duration) -> f64 {
    duration.num_milliseconds() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::{Phase, Playback};
    use crate::core::kinematics::{InitialConditions, solve};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
    }

    fn after_ms(ms: i64) -> DateTime<Utc> {
        t0() + Duration::milliseconds(ms)
    }

    fn throw_playback() -> Playback {
        Playback::with_trajectory(solve(InitialConditions::free_fall(45.0)))
    }

    #[test]
    fn created_idle_at_cursor_zero() {
        let playback = throw_playback();
        let snapshot = playback.snapshot();
        assert_eq!(snapshot.cursor, 0);
        assert_eq!(snapshot.phase, Phase::Idle);
    }

    #[test]
    fn completes_once_past_total_time() {
        let mut playback = throw_playback();
        let last_index = playback.trajectory().unwrap().last_index();
        let total_ms = (playback.trajectory().unwrap().total_time_s() * 1000.0) as i64;

        playback.start(t0());
        let done = playback.advance(after_ms(total_ms + 1000));
        assert_eq!(done.phase, Phase::Completed);
        assert_eq!(done.cursor, last_index);
        assert!(done.just_completed);

        // Repeated polls past completion must not re-raise the signal.
        let again = playback.advance(after_ms(total_ms + 2000));
        assert_eq!(again.phase, Phase::Completed);
        assert_eq!(again.cursor, last_index);
        assert!(!again.just_completed);
    }

    #[test]
    fn cursor_tracks_elapsed_time() {
        let mut playback = throw_playback();
        playback.start(t0());

        let advance = playback.advance(after_ms(1000));
        let sample = playback.trajectory().unwrap().sample(advance.cursor);
        assert_eq!(advance.phase, Phase::Playing);
        assert!(sample.t >= 1.0);
        assert!(sample.t < 1.0 + 0.05 + 1e-9);
    }

    #[test]
    fn cursor_is_monotonic_within_a_session() {
        let mut playback = throw_playback();
        playback.start(t0());

        let mut previous = 0;
        for ms in (0..3200).step_by(37) {
            let advance = playback.advance(after_ms(ms));
            assert!(advance.cursor >= previous, "cursor regressed at {ms} ms");
            previous = advance.cursor;
        }
    }

    #[test]
    fn pause_then_resume_keeps_continuity() {
        let mut playback = throw_playback();
        playback.start(t0());

        let before = playback.advance(after_ms(1200));
        playback.pause();

        // Resume much later at the same simulated position: no time jump.
        let resumed = playback.start(after_ms(60_000));
        assert_eq!(resumed.phase, Phase::Playing);
        let after = playback.advance(after_ms(60_000));
        assert_eq!(after.cursor, before.cursor);
    }

    #[test]
    fn paused_advance_freezes_cursor() {
        let mut playback = throw_playback();
        playback.start(t0());
        let before = playback.advance(after_ms(800));

        playback.pause();
        let while_paused = playback.advance(after_ms(5000));
        assert_eq!(while_paused.phase, Phase::Paused);
        assert_eq!(while_paused.cursor, before.cursor);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut playback = throw_playback();
        playback.start(t0());
        playback.advance(after_ms(1500));

        let snapshot = playback.reset();
        assert_eq!(snapshot.cursor, 0);
        assert_eq!(snapshot.phase, Phase::Idle);

        // Advancing while idle stays put.
        let idle_advance = playback.advance(after_ms(2000));
        assert_eq!(idle_advance.cursor, 0);
        assert_eq!(idle_advance.phase, Phase::Idle);
    }

    #[test]
    fn advancing_without_trajectory_is_a_no_op() {
        let mut playback = Playback::new();
        playback.start(t0());
        let advance = playback.advance(after_ms(1000));
        assert_eq!(advance.cursor, 0);
        assert_eq!(advance.phase, Phase::Idle);
        assert!(!advance.just_completed);
    }

    #[test]
    fn loading_new_trajectory_invalidates_session() {
        let mut playback = throw_playback();
        playback.start(t0());
        playback.advance(after_ms(2500));

        // A much shorter motion replaces the buffer mid-session.
        playback.load(solve(InitialConditions::free_fall(1.0)));
        let snapshot = playback.snapshot();
        assert_eq!(snapshot.cursor, 0);
        assert_eq!(snapshot.phase, Phase::Idle);

        let advance = playback.advance(after_ms(9000));
        assert!(advance.cursor <= playback.trajectory().unwrap().last_index());
    }

    #[test]
    fn restart_after_completion_raises_signal_again() {
        let mut playback = throw_playback();
        playback.start(t0());
        assert!(playback.advance(after_ms(10_000)).just_completed);

        playback.start(after_ms(20_000));
        let rerun = playback.advance(after_ms(31_000));
        assert_eq!(rerun.phase, Phase::Completed);
        assert!(rerun.just_completed);
    }

    #[test]
    fn clock_earlier_than_anchor_clamps_to_start() {
        let mut playback = throw_playback();
        playback.start(t0());

        let advance = playback.advance(t0() - Duration::seconds(5));
        assert_eq!(advance.cursor, 0);
        assert_eq!(advance.phase, Phase::Playing);
    }

    #[test]
    fn single_sample_trajectory_completes_immediately_after_start() {
        let mut playback = Playback::with_trajectory(solve(InitialConditions::free_fall(0.0)));
        playback.start(t0());

        let advance = playback.advance(after_ms(100));
        assert_eq!(advance.phase, Phase::Completed);
        assert_eq!(advance.cursor, 0);
        assert!(advance.just_completed);
    }
}
