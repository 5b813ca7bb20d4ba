mod durations;
mod engine;
mod ticker;

pub use durations::{Durations, DEFAULT_BREAK_MINUTES, DEFAULT_STUDY_MINUTES};
pub use engine::{format_mm_ss, IntervalTimer, Mode, TimerState};
pub use ticker::Ticker;
