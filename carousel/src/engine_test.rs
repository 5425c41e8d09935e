use std::cell::RefCell;
use std::rc::Rc;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn slides(n: usize) -> Vec<usize> {
    (0..n).collect()
}

fn still(n: usize, policy: LoopPolicy) -> Carousel<usize, ManualScheduler> {
    let config = CarouselConfig::default().with_loop_policy(policy).with_autoplay(false);
    Carousel::new(slides(n), config, ManualScheduler::new())
}

fn playing(n: usize, interval_ms: u32) -> Carousel<usize, ManualScheduler> {
    let config = CarouselConfig::default().with_interval_ms(interval_ms);
    Carousel::new(slides(n), config, ManualScheduler::new())
}

fn record(carousel: &mut Carousel<usize, ManualScheduler>) -> Rc<RefCell<Vec<IndexChange>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    carousel.on_change(move |change| sink.borrow_mut().push(change));
    log
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_starts_on_first_slide() {
    let carousel = still(4, LoopPolicy::Wrap);
    assert_eq!(carousel.index(), 0);
    assert_eq!(carousel.slide_count(), 4);
    assert_eq!(carousel.current(), Some(&0));
}

#[test]
fn new_with_autoplay_arms_one_timer() {
    let carousel = playing(3, 5000);
    assert!(carousel.is_running());
    assert!(carousel.autoplay_enabled());
    assert_eq!(carousel.scheduler().live_count(), 1);
}

#[test]
fn new_without_autoplay_arms_nothing() {
    let carousel = still(3, LoopPolicy::Wrap);
    assert!(!carousel.is_running());
    assert_eq!(carousel.scheduler().started_count(), 0);
}

#[test]
fn zero_interval_disables_autoplay() {
    let carousel = playing(3, 0);
    assert!(!carousel.autoplay_enabled());
    assert!(!carousel.is_running());
}

#[test]
fn state_snapshot_reflects_fields() {
    let mut carousel = playing(3, 1000);
    carousel.next();
    carousel.suspend();
    assert_eq!(
        carousel.state(),
        CarouselState { current_index: 1, autoplay_enabled: true, is_suspended: true }
    );
}

// =============================================================
// Empty collection
// =============================================================

#[test]
fn empty_carousel_is_inert() {
    let mut carousel: Carousel<usize, ManualScheduler> =
        Carousel::new(Vec::new(), CarouselConfig::default(), ManualScheduler::new());
    assert!(carousel.is_inert());
    assert!(!carousel.is_running());
    assert!(carousel.next().is_none());
    assert!(carousel.previous().is_none());
    assert_eq!(carousel.go_to(0), Err(CarouselError::EmptyCollection));
    assert_eq!(carousel.set_autoplay(true), Err(CarouselError::EmptyCollection));
    carousel.suspend();
    assert!(!carousel.is_suspended());
    carousel.resume();
    assert!(carousel.advance_by(60_000).is_empty());
    assert_eq!(carousel.scheduler().started_count(), 0);
    assert!(carousel.current().is_none());
    assert!((carousel.progress_percent() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn empty_carousel_ignores_commands() {
    let mut carousel: Carousel<usize, ManualScheduler> =
        Carousel::new(Vec::new(), CarouselConfig::default(), ManualScheduler::new());
    assert!(carousel.apply(Command::Last).is_none());
    assert!(carousel.apply(Command::First).is_none());
    assert!(!carousel.toggle_autoplay());
}

// =============================================================
// go_to
// =============================================================

#[test]
fn go_to_valid_index_sets_it() {
    let mut carousel = still(5, LoopPolicy::Wrap);
    for k in 0..5 {
        carousel.go_to(k).unwrap();
        assert_eq!(carousel.index(), k);
    }
}

#[test]
fn go_to_out_of_range_is_rejected() {
    let mut carousel = still(3, LoopPolicy::Wrap);
    carousel.go_to(1).unwrap();
    assert_eq!(carousel.go_to(3), Err(CarouselError::InvalidIndex { index: 3, len: 3 }));
    assert_eq!(carousel.index(), 1);
}

#[test]
fn go_to_same_index_emits_nothing() {
    let mut carousel = still(3, LoopPolicy::Wrap);
    let log = record(&mut carousel);
    assert_eq!(carousel.go_to(0), Ok(None));
    assert!(log.borrow().is_empty());
}

#[test]
fn go_to_reports_change() {
    let mut carousel = still(3, LoopPolicy::Wrap);
    let change = carousel.go_to(2).unwrap();
    assert_eq!(change, Some(IndexChange { previous: 0, current: 2, cause: ChangeCause::Manual }));
}

// =============================================================
// next / previous
// =============================================================

#[test]
fn wrap_next_sequence_matches_example() {
    let mut carousel = still(3, LoopPolicy::Wrap);
    let mut seen = Vec::new();
    for _ in 0..3 {
        carousel.next();
        seen.push(carousel.index());
    }
    assert_eq!(seen, vec![1, 2, 0]);
}

#[test]
fn wrap_next_n_times_returns_to_start() {
    for n in 1..8 {
        for start in 0..n {
            let mut carousel = still(n, LoopPolicy::Wrap);
            carousel.go_to(start).unwrap();
            for _ in 0..n {
                carousel.next();
            }
            assert_eq!(carousel.index(), start, "n={n} start={start}");
        }
    }
}

#[test]
fn wrap_previous_from_first_goes_to_last() {
    let mut carousel = still(4, LoopPolicy::Wrap);
    carousel.previous();
    assert_eq!(carousel.index(), 3);
}

#[test]
fn clamp_next_stalls_at_last() {
    let mut carousel = still(3, LoopPolicy::Clamp);
    for _ in 0..10 {
        carousel.next();
    }
    assert_eq!(carousel.index(), 2);
    assert!(carousel.next().is_none());
}

#[test]
fn clamp_previous_stalls_at_zero() {
    for start in 0..5 {
        let mut carousel = still(5, LoopPolicy::Clamp);
        carousel.go_to(start).unwrap();
        for _ in 0..10 {
            carousel.previous();
        }
        assert_eq!(carousel.index(), 0);
    }
}

#[test]
fn index_stays_in_bounds_for_mixed_sequences() {
    for policy in [LoopPolicy::Wrap, LoopPolicy::Clamp] {
        for n in 1..6 {
            let mut carousel = still(n, policy);
            // Deterministic pseudo-random walk.
            let mut seed: u32 = 0x9e37_79b9;
            for _ in 0..200 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                if seed % 2 == 0 {
                    carousel.next();
                } else {
                    carousel.previous();
                }
                assert!(carousel.index() < n);
            }
        }
    }
}

#[test]
fn single_slide_never_changes() {
    let mut carousel = still(1, LoopPolicy::Wrap);
    let log = record(&mut carousel);
    carousel.next();
    carousel.previous();
    assert_eq!(carousel.index(), 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn listener_sees_every_change_in_order() {
    let mut carousel = still(3, LoopPolicy::Wrap);
    let log = record(&mut carousel);
    carousel.next();
    carousel.previous();
    carousel.go_to(2).unwrap();
    let changes: Vec<(usize, usize)> = log.borrow().iter().map(|c| (c.previous, c.current)).collect();
    assert_eq!(changes, vec![(0, 1), (1, 0), (0, 2)]);
}

// =============================================================
// Autoplay
// =============================================================

#[test]
fn autoplay_advances_each_interval() {
    let mut carousel = playing(3, 1000);
    let changes = carousel.advance_by(3000);
    let seen: Vec<usize> = changes.iter().map(|c| c.current).collect();
    assert_eq!(seen, vec![1, 2, 0]);
    assert!(changes.iter().all(|c| c.cause == ChangeCause::Autoplay));
}

#[test]
fn autoplay_does_not_fire_early() {
    let mut carousel = playing(3, 1000);
    assert!(carousel.advance_by(999).is_empty());
    assert_eq!(carousel.advance_by(1).len(), 1);
}

#[test]
fn autoplay_rewinds_under_clamp_policy() {
    let config = CarouselConfig::default().with_interval_ms(1000).with_loop_policy(LoopPolicy::Clamp);
    let mut carousel = Carousel::new(slides(2), config, ManualScheduler::new());
    carousel.advance_by(2000);
    assert_eq!(carousel.index(), 0);
}

#[test]
fn set_autoplay_false_cancels_timer() {
    let mut carousel = playing(3, 1000);
    carousel.set_autoplay(false).unwrap();
    assert!(!carousel.is_running());
    assert_eq!(carousel.scheduler().live_count(), 0);
    assert!(carousel.advance_by(10_000).is_empty());
}

#[test]
fn set_autoplay_true_twice_keeps_one_timer() {
    let mut carousel = still(3, LoopPolicy::Wrap);
    carousel.set_autoplay(true).unwrap();
    carousel.set_autoplay(true).unwrap();
    assert_eq!(carousel.scheduler().live_count(), 1);
    assert_eq!(carousel.scheduler().started_count(), 1);
}

#[test]
fn set_autoplay_with_zero_interval_is_misconfigured() {
    let config = CarouselConfig::default().with_interval_ms(0);
    let mut carousel = Carousel::new(slides(3), config, ManualScheduler::new());
    assert_eq!(
        carousel.set_autoplay(true),
        Err(CarouselError::MisconfiguredInterval { interval_ms: 0 })
    );
    assert!(!carousel.is_running());
}

#[test]
fn toggle_autoplay_flips_setting() {
    let mut carousel = playing(3, 1000);
    assert!(!carousel.toggle_autoplay());
    assert!(!carousel.is_running());
    assert!(carousel.toggle_autoplay());
    assert!(carousel.is_running());
}

#[test]
fn set_interval_rearms_running_timer() {
    let mut carousel = playing(3, 1000);
    carousel.advance_by(500);
    carousel.set_interval(3000).unwrap();
    assert_eq!(carousel.scheduler().next_due_ms(), Some(3500));
    assert_eq!(carousel.scheduler().live_count(), 1);
}

#[test]
fn set_interval_zero_stops_autoplay() {
    let mut carousel = playing(3, 1000);
    assert!(carousel.set_interval(0).is_err());
    assert!(!carousel.autoplay_enabled());
    assert!(!carousel.is_running());
}

#[test]
fn set_interval_while_stopped_arms_nothing() {
    let mut carousel = still(3, LoopPolicy::Wrap);
    carousel.set_interval(2000).unwrap();
    assert!(!carousel.is_running());
    assert_eq!(carousel.config().interval_ms, 2000);
}

// =============================================================
// Countdown reset
// =============================================================

#[test]
fn manual_next_resets_countdown() {
    let mut carousel = playing(5, 5000);
    carousel.advance_by(4000);
    carousel.next();
    assert!(carousel.advance_by(4999).is_empty());
    let changes = carousel.advance_by(1);
    assert_eq!(changes.len(), 1);
    assert_eq!(carousel.index(), 2);
}

#[test]
fn manual_previous_resets_countdown() {
    let mut carousel = playing(5, 5000);
    carousel.advance_by(3000);
    carousel.previous();
    assert!(carousel.advance_by(4999).is_empty());
    assert_eq!(carousel.advance_by(1).len(), 1);
}

#[test]
fn go_to_resets_countdown() {
    let mut carousel = playing(5, 5000);
    carousel.advance_by(4900);
    carousel.go_to(3).unwrap();
    assert!(carousel.advance_by(4999).is_empty());
    assert_eq!(carousel.advance_by(1).len(), 1);
    assert_eq!(carousel.index(), 4);
}

#[test]
fn go_to_same_index_still_resets_countdown() {
    let mut carousel = playing(3, 1000);
    carousel.advance_by(900);
    carousel.go_to(0).unwrap();
    assert!(carousel.advance_by(999).is_empty());
}

#[test]
fn manual_navigation_never_stacks_timers() {
    let mut carousel = playing(4, 1000);
    for _ in 0..20 {
        carousel.next();
        carousel.previous();
        carousel.go_to(2).unwrap();
        assert_eq!(carousel.scheduler().live_count(), 1);
    }
}

#[test]
fn manual_navigation_while_stopped_arms_nothing() {
    let mut carousel = still(4, LoopPolicy::Wrap);
    carousel.next();
    carousel.go_to(3).unwrap();
    assert_eq!(carousel.scheduler().started_count(), 0);
}

// =============================================================
// Suspension
// =============================================================

#[test]
fn suspend_stops_all_changes_until_resume() {
    let mut carousel = playing(3, 1000);
    carousel.advance_by(1000);
    carousel.suspend();
    assert!(carousel.advance_by(60_000).is_empty());
    assert_eq!(carousel.scheduler().live_count(), 0);
    carousel.resume();
    assert!(carousel.is_running());
    assert_eq!(carousel.advance_by(1000).len(), 1);
}

#[test]
fn resume_restarts_full_interval() {
    let mut carousel = playing(3, 1000);
    carousel.advance_by(900);
    carousel.suspend();
    carousel.advance_by(50);
    carousel.resume();
    assert!(carousel.advance_by(999).is_empty());
    assert_eq!(carousel.advance_by(1).len(), 1);
}

#[test]
fn resume_without_autoplay_stays_stopped() {
    let mut carousel = still(3, LoopPolicy::Wrap);
    carousel.suspend();
    carousel.resume();
    assert!(!carousel.is_running());
}

#[test]
fn set_autoplay_while_suspended_waits_for_resume() {
    let mut carousel = still(3, LoopPolicy::Wrap);
    carousel.suspend();
    carousel.set_autoplay(true).unwrap();
    assert!(!carousel.is_running());
    carousel.resume();
    assert!(carousel.is_running());
}

#[test]
fn reasons_are_tracked_independently() {
    let mut carousel = playing(3, 1000);
    carousel.suspend_for(SuspendReason::Hover);
    carousel.suspend_for(SuspendReason::Focus);
    carousel.resume_for(SuspendReason::Hover);
    assert!(carousel.is_suspended());
    assert!(carousel.is_suspended_for(SuspendReason::Focus));
    assert!(!carousel.is_running());
    carousel.resume_for(SuspendReason::Focus);
    assert!(!carousel.is_suspended());
    assert!(carousel.is_running());
}

#[test]
fn hover_is_ignored_when_not_configured() {
    let config = CarouselConfig { pause_on_hover: false, ..CarouselConfig::default() };
    let mut carousel = Carousel::new(slides(3), config, ManualScheduler::new());
    carousel.suspend_for(SuspendReason::Hover);
    assert!(!carousel.is_suspended());
    assert!(carousel.is_running());
}

#[test]
fn touch_is_ignored_when_not_configured() {
    let config = CarouselConfig { pause_on_touch: false, ..CarouselConfig::default() };
    let mut carousel = Carousel::new(slides(3), config, ManualScheduler::new());
    carousel.suspend_for(SuspendReason::Touch);
    assert!(carousel.is_running());
}

#[test]
fn offscreen_always_suspends() {
    let config = CarouselConfig {
        pause_on_hover: false,
        pause_on_touch: false,
        pause_on_focus: false,
        ..CarouselConfig::default()
    };
    let mut carousel = Carousel::new(slides(3), config, ManualScheduler::new());
    carousel.suspend_for(SuspendReason::Offscreen);
    assert!(!carousel.is_running());
}

#[test]
fn spurious_resume_does_not_reset_countdown() {
    let mut carousel = playing(3, 1000);
    carousel.advance_by(600);
    carousel.resume_for(SuspendReason::Hover);
    assert_eq!(carousel.advance_by(400).len(), 1);
}

#[test]
fn manual_navigation_while_suspended_arms_nothing() {
    let mut carousel = playing(3, 1000);
    carousel.suspend();
    carousel.next();
    assert!(!carousel.is_running());
    assert_eq!(carousel.scheduler().live_count(), 0);
}

// =============================================================
// Stale ticks
// =============================================================

#[test]
fn stale_tick_is_dropped() {
    let mut carousel = playing(3, 1000);
    carousel.next();
    // The timer armed at construction was TimerId(1); next() replaced it.
    assert!(carousel.on_timer(TimerId(1)).is_none());
    assert_eq!(carousel.index(), 1);
}

#[test]
fn tick_while_stopped_is_dropped() {
    let mut carousel = still(3, LoopPolicy::Wrap);
    assert!(carousel.on_timer(TimerId(1)).is_none());
    assert_eq!(carousel.index(), 0);
}

// =============================================================
// Commands
// =============================================================

#[test]
fn apply_dispatches_navigation() {
    let mut carousel = still(4, LoopPolicy::Clamp);
    carousel.apply(Command::Last);
    assert_eq!(carousel.index(), 3);
    carousel.apply(Command::Previous);
    assert_eq!(carousel.index(), 2);
    carousel.apply(Command::First);
    assert_eq!(carousel.index(), 0);
    carousel.apply(Command::Next);
    assert_eq!(carousel.index(), 1);
    carousel.apply(Command::GoTo(3));
    assert_eq!(carousel.index(), 3);
}

#[test]
fn apply_goto_out_of_range_is_ignored() {
    let mut carousel = still(2, LoopPolicy::Wrap);
    assert!(carousel.apply(Command::GoTo(9)).is_none());
    assert_eq!(carousel.index(), 0);
}

#[test]
fn apply_toggle_autoplay() {
    let mut carousel = still(3, LoopPolicy::Wrap);
    carousel.apply(Command::ToggleAutoplay);
    assert!(carousel.is_running());
}

// =============================================================
// Render helpers
// =============================================================

#[test]
fn clamp_bounds_disable_buttons() {
    let mut carousel = still(3, LoopPolicy::Clamp);
    assert!(!carousel.can_go_previous());
    assert!(carousel.can_go_next());
    carousel.go_to(2).unwrap();
    assert!(carousel.can_go_previous());
    assert!(!carousel.can_go_next());
}

#[test]
fn wrap_buttons_enabled_with_several_slides() {
    let carousel = still(3, LoopPolicy::Wrap);
    assert!(carousel.can_go_previous());
    assert!(carousel.can_go_next());
    let single = still(1, LoopPolicy::Wrap);
    assert!(!single.can_go_previous());
    assert!(!single.can_go_next());
}

#[test]
fn progress_and_offset_follow_index() {
    let mut carousel = still(4, LoopPolicy::Wrap);
    assert!((carousel.progress_percent() - 25.0).abs() < 1e-9);
    assert!((carousel.track_offset_percent() - 0.0).abs() < 1e-9);
    carousel.go_to(3).unwrap();
    assert!((carousel.progress_percent() - 100.0).abs() < 1e-9);
    assert!((carousel.track_offset_percent() + 300.0).abs() < 1e-9);
}

// =============================================================
// Independence and teardown
// =============================================================

#[test]
fn instances_do_not_share_state() {
    let mut a = playing(3, 1000);
    let mut b = playing(5, 2000);
    a.next();
    a.suspend();
    assert_eq!(b.index(), 0);
    assert!(b.is_running());
    b.advance_by(2000);
    assert_eq!(b.index(), 1);
    assert_eq!(a.index(), 1);
}

#[derive(Clone, Default)]
struct SharedScheduler {
    live: Rc<RefCell<Vec<TimerId>>>,
}

impl Scheduler for SharedScheduler {
    fn start(&mut self, id: TimerId, _interval_ms: u32) {
        self.live.borrow_mut().push(id);
    }

    fn cancel(&mut self, id: TimerId) {
        self.live.borrow_mut().retain(|live| *live != id);
    }
}

#[test]
fn drop_cancels_live_timer() {
    let scheduler = SharedScheduler::default();
    let live = Rc::clone(&scheduler.live);
    let carousel = Carousel::new(slides(3), CarouselConfig::default(), scheduler);
    assert_eq!(live.borrow().len(), 1);
    drop(carousel);
    assert!(live.borrow().is_empty());
}

#[test]
fn scheduler_never_holds_more_than_one_timer() {
    let scheduler = SharedScheduler::default();
    let live = Rc::clone(&scheduler.live);
    let mut carousel = Carousel::new(slides(4), CarouselConfig::default(), scheduler);
    carousel.suspend_for(SuspendReason::Hover);
    carousel.resume_for(SuspendReason::Hover);
    carousel.next();
    carousel.set_autoplay(true).unwrap();
    carousel.set_interval(700).unwrap();
    carousel.resume();
    carousel.go_to(1).unwrap();
    assert_eq!(live.borrow().len(), 1);
}
