//! Study/break interval timer.
//!
//! The timer is a second-granular state machine. It owns no thread or clock;
//! the caller invokes `tick()` once per elapsed second while it is running
//! (see [`Ticker`](super::Ticker)).
//!
//! ## State Transitions
//!
//! ```text
//! Idle --start--> Running(Study) --tick@0--> Running(Break) --tick@0--> Idle
//!                   |      ^                   |      ^
//!                 pause  start               pause  start
//!                   v      |                   v      |
//!                 Paused(Study)              Paused(Break)
//! ```
//!
//! `reset()` returns to `Idle` from anywhere and zeroes the session count.
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = IntervalTimer::new();
//! timer.configure("25", "5")?;
//! timer.start();
//! // Once per second:
//! if let Some(event) = timer.tick() { /* BreakStarted / BreakFinished */ }
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::durations::Durations;
use crate::error::ValidationError;
use crate::events::{Event, BREAK_FINISHED_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Study,
    Break,
}

/// Core interval timer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalTimer {
    durations: Durations,
    state: TimerState,
    mode: Mode,
    remaining_secs: u64,
    session_count: u32,
}

impl IntervalTimer {
    /// Fresh idle timer with the default 25/5 minute durations.
    pub fn new() -> Self {
        Self::with_durations(Durations::default())
    }

    pub fn with_durations(durations: Durations) -> Self {
        Self {
            durations,
            state: TimerState::Idle,
            mode: Mode::Study,
            remaining_secs: 0,
            session_count: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn session_count(&self) -> u32 {
        self.session_count
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn durations(&self) -> Durations {
        self.durations
    }

    /// Remaining time as `MM:SS`. Minutes are not capped at 59.
    pub fn format_remaining(&self) -> String {
        format_mm_ss(self.remaining_secs)
    }

    /// Caption above the countdown.
    pub fn headline(&self) -> &'static str {
        if self.is_running() || self.remaining_secs > 0 {
            match self.mode {
                Mode::Study => "FOCUS TIME",
                Mode::Break => "BREAK TIME",
            }
        } else {
            "READY?"
        }
    }

    /// Label for the start button.
    pub fn start_label(&self) -> &'static str {
        if self.remaining_secs > 0 {
            "Resume"
        } else {
            "Start"
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            mode: self.mode,
            headline: self.headline().to_string(),
            remaining_secs: self.remaining_secs,
            remaining: self.format_remaining(),
            session_count: self.session_count,
            study_secs: self.durations.study_secs(),
            break_secs: self.durations.break_secs(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Set study and break lengths from user text. Run state is untouched;
    /// the new lengths apply the next time a period begins.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidDuration`]; the timer is left unchanged.
    pub fn configure(&mut self, study_min: &str, break_min: &str) -> Result<(), ValidationError> {
        self.durations = Durations::parse(study_min, break_min)?;
        tracing::debug!(
            study_min = self.durations.study_min(),
            break_min = self.durations.break_min(),
            "timer configured"
        );
        Ok(())
    }

    /// Typed variant of [`configure`](Self::configure).
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidDuration`] when either value is zero.
    pub fn configure_minutes(&mut self, study_min: u64, break_min: u64) -> Result<(), ValidationError> {
        self.durations = Durations::new(study_min, break_min)?;
        Ok(())
    }

    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => None,
            TimerState::Paused => {
                self.state = TimerState::Running;
                tracing::debug!(mode = ?self.mode, remaining = self.remaining_secs, "timer resumed");
                Some(Event::TimerResumed {
                    mode: self.mode,
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Idle => {
                self.mode = Mode::Study;
                self.remaining_secs = self.durations.study_secs();
                self.state = TimerState::Running;
                tracing::debug!(duration = self.remaining_secs, "study period started");
                Some(Event::TimerStarted {
                    mode: Mode::Study,
                    duration_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.state = TimerState::Paused;
        tracing::debug!(mode = ?self.mode, remaining = self.remaining_secs, "timer paused");
        Some(Event::TimerPaused {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.state = TimerState::Idle;
        self.mode = Mode::Study;
        self.remaining_secs = 0;
        self.session_count = 0;
        tracing::debug!("timer reset");
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Advance one second. No-op unless running.
    ///
    /// Reaching zero and switching period are separate ticks: the tick that
    /// finds `remaining == 0` performs the switch.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            return None;
        }
        match self.mode {
            Mode::Study => {
                self.mode = Mode::Break;
                self.remaining_secs = self.durations.break_secs();
                self.session_count = self.session_count.saturating_add(1);
                tracing::info!(sessions = self.session_count, "study period complete, break started");
                Some(Event::BreakStarted {
                    session_count: self.session_count,
                    duration_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            Mode::Break => {
                self.state = TimerState::Idle;
                self.mode = Mode::Study;
                tracing::info!(sessions = self.session_count, "break finished");
                Some(Event::BreakFinished {
                    session_count: self.session_count,
                    message: BREAK_FINISHED_MESSAGE.to_string(),
                    at: Utc::now(),
                })
            }
        }
    }
}

impl Default for IntervalTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// `MM:SS`, both zero-padded to two digits; minutes grow past 99 as needed.
pub fn format_mm_ss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_minute_timer() -> IntervalTimer {
        let mut timer = IntervalTimer::new();
        timer.configure("1", "1").unwrap();
        timer
    }

    #[test]
    fn fresh_timer_is_idle() {
        let timer = IntervalTimer::new();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.mode(), Mode::Study);
        assert_eq!(timer.remaining_secs(), 0);
        assert_eq!(timer.session_count(), 0);
        assert!(!timer.is_running());
        assert_eq!(timer.headline(), "READY?");
        assert_eq!(timer.start_label(), "Start");
    }

    #[test]
    fn start_pause_resume() {
        let mut timer = one_minute_timer();
        assert!(matches!(timer.start(), Some(Event::TimerStarted { duration_secs: 60, .. })));
        assert_eq!(timer.state(), TimerState::Running);
        assert!(timer.start().is_none());

        timer.tick();
        assert!(timer.pause().is_some());
        assert_eq!(timer.state(), TimerState::Paused);
        assert!(timer.pause().is_none());
        assert_eq!(timer.start_label(), "Resume");

        assert!(matches!(
            timer.start(),
            Some(Event::TimerResumed { remaining_secs: 59, .. })
        ));
        assert_eq!(timer.remaining_secs(), 59);
    }

    #[test]
    fn tick_is_noop_unless_running() {
        let mut timer = one_minute_timer();
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_secs(), 0);

        timer.start();
        timer.pause();
        for _ in 0..5 {
            assert!(timer.tick().is_none());
        }
        assert_eq!(timer.remaining_secs(), 60);
    }

    #[test]
    fn study_rolls_into_break_then_idle() {
        let mut timer = one_minute_timer();
        timer.start();
        for _ in 0..60 {
            assert!(timer.tick().is_none());
        }
        assert_eq!(timer.format_remaining(), "00:00");
        assert_eq!(timer.mode(), Mode::Study);

        let event = timer.tick();
        assert!(matches!(
            event,
            Some(Event::BreakStarted { session_count: 1, duration_secs: 60, .. })
        ));
        assert_eq!(timer.mode(), Mode::Break);
        assert_eq!(timer.headline(), "BREAK TIME");

        for _ in 0..60 {
            assert!(timer.tick().is_none());
        }
        let event = timer.tick().unwrap();
        assert!(event.is_alert());
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.mode(), Mode::Study);
        assert_eq!(timer.session_count(), 1);
    }

    #[test]
    fn configure_failure_leaves_state_alone() {
        let mut timer = one_minute_timer();
        timer.start();
        timer.tick();
        let before = timer.snapshot();
        assert!(timer.configure("0", "5").is_err());
        assert!(timer.configure("5", "x").is_err());
        assert_eq!(timer.durations().study_secs(), 60);
        assert_eq!(timer.remaining_secs(), 59);
        match before {
            Event::StateSnapshot { state, .. } => assert_eq!(state, timer.state()),
            _ => panic!("Expected StateSnapshot"),
        }
    }

    #[test]
    fn configure_does_not_change_run_state() {
        let mut timer = one_minute_timer();
        timer.start();
        timer.configure("2", "3").unwrap();
        assert!(timer.is_running());
        assert_eq!(timer.remaining_secs(), 60);
    }

    #[test]
    fn reset_goes_to_fresh_state() {
        let mut timer = one_minute_timer();
        timer.start();
        for _ in 0..61 {
            timer.tick();
        }
        assert_eq!(timer.session_count(), 1);
        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.mode(), Mode::Study);
        assert_eq!(timer.remaining_secs(), 0);
        assert_eq!(timer.session_count(), 0);
    }

    #[test]
    fn deserialized_timer_cannot_have_zero_study() {
        let json = r#"{"durations":{"study_min":0,"break_min":0},"state":"idle","mode":"study","remaining_secs":0,"session_count":0}"#;
        assert!(serde_json::from_str::<IntervalTimer>(json).is_err());

        let timer = one_minute_timer();
        let back: IntervalTimer = serde_json::from_str(&serde_json::to_string(&timer).unwrap()).unwrap();
        assert_eq!(back.durations().study_secs(), 60);
    }

    #[test]
    fn format_has_no_minute_cap() {
        assert_eq!(format_mm_ss(3661), "61:01");
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(6000), "100:00");
    }

    #[test]
    fn snapshot_returns_valid_event() {
        let timer = IntervalTimer::new();
        match timer.snapshot() {
            Event::StateSnapshot {
                state,
                remaining,
                study_secs,
                break_secs,
                ..
            } => {
                assert_eq!(state, TimerState::Idle);
                assert_eq!(remaining, "00:00");
                assert_eq!(study_secs, 25 * 60);
                assert_eq!(break_secs, 5 * 60);
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }
}
