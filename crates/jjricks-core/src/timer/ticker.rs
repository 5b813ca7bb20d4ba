//! Caller-owned tick source for [`IntervalTimer`](super::IntervalTimer).
//!
//! The interval exists only while the timer is running. Acquire and release
//! are driven by [`Ticker::sync`], so ticks stop the moment the timer leaves
//! `Running` and restart a full period after it re-enters.

use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

pub struct Ticker {
    period: Duration,
    interval: Option<Interval>,
}

impl Ticker {
    /// A zero period is bumped to one millisecond.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            interval: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    /// Acquire the interval when `running` and none is held, drop it when not.
    pub fn sync(&mut self, running: bool) {
        match (running, self.interval.is_some()) {
            (true, false) => {
                let mut interval = interval_at(Instant::now() + self.period, self.period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                self.interval = Some(interval);
                tracing::trace!(period_ms = self.period.as_millis() as u64, "ticker acquired");
            }
            (false, true) => {
                self.interval = None;
                tracing::trace!("ticker released");
            }
            _ => {}
        }
    }

    /// Wait for the next tick. Never resolves while released.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_tick_is_one_period_after_acquire() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        ticker.sync(true);
        let start = Instant::now();
        ticker.tick().await;
        assert_eq!(start.elapsed(), Duration::from_secs(1));
        ticker.tick().await;
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn released_ticker_never_fires() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        ticker.sync(true);
        ticker.sync(false);
        assert!(!ticker.is_active());
        let waited = tokio::time::timeout(Duration::from_secs(10), ticker.tick()).await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn resync_while_running_keeps_phase() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        ticker.sync(true);
        let start = Instant::now();
        tokio::time::advance(Duration::from_millis(400)).await;
        ticker.sync(true);
        ticker.tick().await;
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn zero_period_is_clamped() {
        assert_eq!(Ticker::new(Duration::ZERO).period(), Duration::from_millis(1));
    }
}
