use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Mode, TimerState};

/// Shown when a break runs out.
pub const BREAK_FINISHED_MESSAGE: &str = "Break is over! Ready for another session?";

/// Every state change of the interval timer produces an Event.
/// The host renders them; `BreakFinished` is the one-shot alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    /// A study period completed and the break countdown began.
    BreakStarted {
        session_count: u32,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// The break ran out; the timer is idle until started again.
    BreakFinished {
        session_count: u32,
        message: String,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        mode: Mode,
        headline: String,
        remaining_secs: u64,
        remaining: String,
        session_count: u32,
        study_secs: u64,
        break_secs: u64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// True for the one-shot notification the host should surface as an alert.
    pub fn is_alert(&self) -> bool {
        matches!(self, Event::BreakFinished { .. })
    }
}
