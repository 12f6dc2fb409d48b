//! Transition timing.

use std::time::{Duration, Instant};

use super::easing::{ease, Easing};

/// Current state of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TransitionState {
    /// No transition in progress.
    #[default]
    Idle,
    /// Transition is running.
    Running {
        /// Eased progress from 0.0 to 1.0.
        progress: f32,
    },
}

impl TransitionState {
    /// Check if a transition is currently in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, TransitionState::Running { .. })
    }

    /// Get the eased progress if running.
    pub fn progress(&self) -> Option<f32> {
        match self {
            TransitionState::Running { progress } => Some(*progress),
            TransitionState::Idle => None,
        }
    }
}

/// A fire-and-forget animation clock.
///
/// All timing methods take the current [`Instant`] explicitly so that hosts
/// can drive animations from their frame clock and tests can step time.
#[derive(Debug, Clone)]
pub struct Transition {
    easing: Easing,
    duration: Duration,
    start_time: Option<Instant>,
}

impl Transition {
    /// Create an idle transition.
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            easing,
            duration,
            start_time: None,
        }
    }

    /// Get the easing function.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Set the easing function.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Get the transition duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Set the transition duration.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Check if the transition has been started and not yet finished or stopped.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.start_time.is_some()
    }

    /// Start (or restart) the transition at `now`.
    ///
    /// Returns `false` for a zero duration, in which case the caller should
    /// apply the end state directly.
    pub fn start_at(&mut self, now: Instant) -> bool {
        if self.duration.is_zero() {
            self.start_time = None;
            return false;
        }
        self.start_time = Some(now);
        true
    }

    /// Stop the transition immediately.
    pub fn stop(&mut self) {
        self.start_time = None;
    }

    /// Sample the transition at `now`.
    ///
    /// Returns `Idle` once the duration has elapsed, after which the owner
    /// should snap to its end state.
    pub fn update_at(&mut self, now: Instant) -> TransitionState {
        let Some(start_time) = self.start_time else {
            return TransitionState::Idle;
        };

        let elapsed = now.saturating_duration_since(start_time);
        let raw_progress = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);

        if raw_progress >= 1.0 {
            self.start_time = None;
            return TransitionState::Idle;
        }

        TransitionState::Running {
            progress: ease(self.easing, raw_progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition() -> Transition {
        Transition::new(Duration::from_millis(300), Easing::Linear)
    }

    #[test]
    fn test_transition_idle_until_started() {
        let mut t = transition();
        assert!(!t.is_running());
        assert_eq!(t.update_at(Instant::now()), TransitionState::Idle);
    }

    #[test]
    fn test_transition_progress() {
        let mut t = transition();
        let start = Instant::now();
        assert!(t.start_at(start));

        let state = t.update_at(start + Duration::from_millis(150));
        let progress = state.progress().unwrap();
        assert!((progress - 0.5).abs() < 1e-3);

        assert_eq!(t.update_at(start + Duration::from_millis(300)), TransitionState::Idle);
        assert!(!t.is_running());
    }

    #[test]
    fn test_transition_zero_duration_does_not_start() {
        let mut t = Transition::new(Duration::ZERO, Easing::EaseOut);
        assert!(!t.start_at(Instant::now()));
        assert!(!t.is_running());
    }

    #[test]
    fn test_transition_restart_resets_clock() {
        let mut t = transition();
        let start = Instant::now();
        t.start_at(start);
        let restart = start + Duration::from_millis(200);
        t.start_at(restart);

        let progress = t
            .update_at(restart + Duration::from_millis(30))
            .progress()
            .unwrap();
        assert!((progress - 0.1).abs() < 1e-3);
    }

    #[test]
    fn test_transition_stop() {
        let mut t = transition();
        let start = Instant::now();
        t.start_at(start);
        t.stop();
        assert_eq!(t.update_at(start), TransitionState::Idle);
    }
}
