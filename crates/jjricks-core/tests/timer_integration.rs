//! Integration tests for the study/break interval timer.

use std::time::Duration;

use jjricks_core::{Event, IntervalTimer, Mode, Ticker, TimerState};

#[test]
fn pomodoro_switches_to_break_exactly_once() {
    let mut timer = IntervalTimer::new();
    timer.configure("25", "5").unwrap();
    timer.start();

    let mut transitions = Vec::new();
    for _ in 0..1500 {
        if let Some(event) = timer.tick() {
            transitions.push(event);
        }
    }
    assert!(transitions.is_empty());
    assert_eq!(timer.remaining_secs(), 0);
    assert_eq!(timer.mode(), Mode::Study);

    match timer.tick() {
        Some(Event::BreakStarted {
            session_count,
            duration_secs,
            ..
        }) => {
            assert_eq!(session_count, 1);
            assert_eq!(duration_secs, 300);
        }
        other => panic!("Expected BreakStarted, got {other:?}"),
    }
    assert_eq!(timer.session_count(), 1);
    assert_eq!(timer.remaining_secs(), 300);
    assert_eq!(timer.mode(), Mode::Break);
}

#[test]
fn one_minute_formats() {
    let mut timer = IntervalTimer::new();
    timer.configure("1", "1").unwrap();
    timer.start();
    assert_eq!(timer.format_remaining(), "01:00");
    for _ in 0..60 {
        timer.tick();
    }
    assert_eq!(timer.format_remaining(), "00:00");
}

#[test]
fn pause_freezes_then_resume_continues() {
    let mut timer = IntervalTimer::new();
    timer.configure("1", "1").unwrap();
    timer.start();
    for _ in 0..10 {
        timer.tick();
    }
    timer.pause();
    for _ in 0..5 {
        timer.tick();
    }
    assert_eq!(timer.remaining_secs(), 50);

    timer.start();
    timer.tick();
    assert_eq!(timer.remaining_secs(), 49);
}

fn idle(_: &mut IntervalTimer) {}

fn running(t: &mut IntervalTimer) {
    t.start();
}

fn paused(t: &mut IntervalTimer) {
    t.start();
    t.pause();
}

fn on_break(t: &mut IntervalTimer) {
    t.start();
    for _ in 0..61 {
        t.tick();
    }
}

#[test]
fn reset_from_every_state() {
    let setups: [fn(&mut IntervalTimer); 4] = [idle, running, paused, on_break];
    for setup in setups {
        let mut timer = IntervalTimer::new();
        timer.configure("1", "1").unwrap();
        setup(&mut timer);
        timer.reset();
        assert_eq!(timer.remaining_secs(), 0);
        assert_eq!(timer.mode(), Mode::Study);
        assert_eq!(timer.session_count(), 0);
        assert!(!timer.is_running());
    }
}

#[test]
fn second_cycle_counts_another_session() {
    let mut timer = IntervalTimer::new();
    timer.configure_minutes(1, 1).unwrap();
    for _ in 0..2 {
        timer.start();
        while timer.is_running() {
            timer.tick();
        }
    }
    assert_eq!(timer.session_count(), 2);
    assert_eq!(timer.state(), TimerState::Idle);
}

#[tokio::test(start_paused = true)]
async fn ticker_drives_a_full_cycle_in_real_seconds() {
    let mut timer = IntervalTimer::new();
    timer.configure("1", "1").unwrap();
    let mut ticker = Ticker::new(Duration::from_secs(1));

    let started = tokio::time::Instant::now();
    timer.start();
    let mut events = Vec::new();
    loop {
        ticker.sync(timer.is_running());
        if !ticker.is_active() {
            break;
        }
        ticker.tick().await;
        if let Some(event) = timer.tick() {
            events.push(event);
        }
    }

    // 60 s of study, one switching tick, 60 s of break, one finishing tick.
    assert_eq!(started.elapsed(), Duration::from_secs(122));
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], Event::BreakStarted { .. }));
    assert!(events[1].is_alert());
    assert_eq!(timer.state(), TimerState::Idle);
}

#[tokio::test(start_paused = true)]
async fn paused_timer_gets_no_ticks() {
    let mut timer = IntervalTimer::new();
    timer.configure("1", "1").unwrap();
    let mut ticker = Ticker::new(Duration::from_secs(1));

    timer.start();
    ticker.sync(timer.is_running());
    ticker.tick().await;
    timer.tick();
    timer.pause();
    ticker.sync(timer.is_running());

    let waited = tokio::time::timeout(Duration::from_secs(30), ticker.tick()).await;
    assert!(waited.is_err());
    assert_eq!(timer.remaining_secs(), 59);
}
