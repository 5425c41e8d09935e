use super::*;

// =============================================================
// ManualScheduler
// =============================================================

#[test]
fn new_scheduler_is_idle() {
    let scheduler = ManualScheduler::new();
    assert_eq!(scheduler.now_ms(), 0);
    assert_eq!(scheduler.live_count(), 0);
    assert!(scheduler.next_due_ms().is_none());
}

#[test]
fn start_arms_one_interval_ahead() {
    let mut scheduler = ManualScheduler::new();
    scheduler.set_now(250);
    scheduler.start(TimerId(1), 1000);
    assert_eq!(scheduler.next_due_ms(), Some(1250));
    assert_eq!(scheduler.live_count(), 1);
    assert_eq!(scheduler.started_count(), 1);
}

#[test]
fn pop_due_before_deadline_returns_none() {
    let mut scheduler = ManualScheduler::new();
    scheduler.start(TimerId(1), 1000);
    assert!(scheduler.pop_due(999).is_none());
}

#[test]
fn pop_due_fires_and_rearms() {
    let mut scheduler = ManualScheduler::new();
    scheduler.start(TimerId(7), 1000);
    assert_eq!(scheduler.pop_due(1000), Some(TimerId(7)));
    assert_eq!(scheduler.now_ms(), 1000);
    assert_eq!(scheduler.next_due_ms(), Some(2000));
}

#[test]
fn pop_due_fires_repeatedly_within_window() {
    let mut scheduler = ManualScheduler::new();
    scheduler.start(TimerId(1), 300);
    let mut fired = 0;
    while scheduler.pop_due(1000).is_some() {
        fired += 1;
    }
    assert_eq!(fired, 3);
    assert_eq!(scheduler.now_ms(), 900);
}

#[test]
fn cancel_disarms_timer() {
    let mut scheduler = ManualScheduler::new();
    scheduler.start(TimerId(1), 100);
    scheduler.cancel(TimerId(1));
    assert_eq!(scheduler.live_count(), 0);
    assert!(scheduler.pop_due(10_000).is_none());
    assert_eq!(scheduler.started_count(), 1);
}

#[test]
fn cancel_unknown_id_is_ignored() {
    let mut scheduler = ManualScheduler::new();
    scheduler.start(TimerId(1), 100);
    scheduler.cancel(TimerId(2));
    assert_eq!(scheduler.live_count(), 1);
}

#[test]
fn clock_never_runs_backwards() {
    let mut scheduler = ManualScheduler::new();
    scheduler.set_now(500);
    scheduler.set_now(100);
    assert_eq!(scheduler.now_ms(), 500);
}

#[test]
fn zero_interval_is_treated_as_one_millisecond() {
    let mut scheduler = ManualScheduler::new();
    scheduler.start(TimerId(1), 0);
    assert_eq!(scheduler.next_due_ms(), Some(1));
}

#[test]
fn earliest_timer_fires_first() {
    let mut scheduler = ManualScheduler::new();
    scheduler.start(TimerId(1), 500);
    scheduler.start(TimerId(2), 200);
    assert_eq!(scheduler.pop_due(1000), Some(TimerId(2)));
    assert_eq!(scheduler.pop_due(1000), Some(TimerId(2)));
    assert_eq!(scheduler.pop_due(1000), Some(TimerId(1)));
}
