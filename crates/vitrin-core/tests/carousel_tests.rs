//! Host-side tests for the carousel state machine. Time is simulated by
//! feeding durations into `tick`, so auto-advance behavior is checked
//! without any real clock.

use std::time::Duration;
use vitrin_core::carousel::{settled_index, CarouselState, ScrollSettle, Settled};

const PERIOD: Duration = Duration::from_millis(4000);

#[test]
fn go_to_wraps_any_integer_into_range() {
    for count in 1..=6usize {
        let n = count as i64;
        let mut c = CarouselState::new(count);
        for target in -25..=25i64 {
            let got = c.go_to(target).expect("non-empty carousel");
            let want = (((target % n) + n) % n) as usize;
            assert_eq!(got, want, "go_to({target}) with {count} slides");
            assert_eq!(c.index(), want);
        }
    }
}

#[test]
fn next_and_prev_are_inverses() {
    for count in 1..=5usize {
        for start in 0..count {
            let mut c = CarouselState::new(count);
            c.go_to(start as i64);
            c.next();
            c.prev();
            assert_eq!(c.index(), start, "next/prev from {start} of {count}");
            c.prev();
            c.next();
            assert_eq!(c.index(), start, "prev/next from {start} of {count}");
        }
    }
}

#[test]
fn three_slide_walkthrough_wraps_both_ways() {
    let mut c = CarouselState::new(3);
    assert_eq!(c.index(), 0);
    c.next();
    assert_eq!(c.index(), 1);
    c.next();
    assert_eq!(c.index(), 2);
    c.next();
    assert_eq!(c.index(), 0, "wraps past the last slide");
    c.prev();
    assert_eq!(c.index(), 2, "wraps backwards from the first");
}

#[test]
fn empty_carousel_ignores_everything() {
    let mut c = CarouselState::new(0);
    assert_eq!(c.go_to(5), None);
    assert_eq!(c.next(), None);
    assert_eq!(c.prev(), None);
    c.set_index(3);
    assert_eq!(c.index(), 0);
    c.start_auto(PERIOD);
    assert_eq!(c.tick(PERIOD * 3), 0);
    assert_eq!(c.index(), 0);
}

#[test]
fn auto_advance_steps_once_per_period() {
    let mut c = CarouselState::new(4);
    c.start_auto(PERIOD);
    for want in [1usize, 2, 3, 0, 1] {
        assert_eq!(c.tick(PERIOD), 1);
        assert_eq!(c.index(), want);
    }
}

#[test]
fn auto_advance_accumulates_partial_frames() {
    let mut c = CarouselState::new(3);
    c.start_auto(Duration::from_millis(90));
    let frame = Duration::from_millis(16);
    let mut steps = 0;
    for _ in 0..100 {
        steps += c.tick(frame);
    }
    // 1600 ms of 16 ms frames against a 90 ms period
    assert_eq!(steps, 17);
    assert_eq!(c.index(), 17 % 3);
}

#[test]
fn oversized_tick_catches_up() {
    let mut c = CarouselState::new(10);
    c.start_auto(PERIOD);
    assert_eq!(c.tick(PERIOD * 3), 3);
    assert_eq!(c.index(), 3);
}

#[test]
fn stop_auto_halts_until_rearmed() {
    let mut c = CarouselState::new(3);
    c.start_auto(PERIOD);
    c.tick(PERIOD);
    assert_eq!(c.index(), 1);

    c.stop_auto();
    assert!(!c.auto_running());
    assert_eq!(c.tick(PERIOD * 10), 0);
    assert_eq!(c.index(), 1);

    c.stop_auto(); // harmless when already idle

    c.start_auto(PERIOD);
    assert_eq!(c.tick(PERIOD), 1);
    assert_eq!(c.index(), 2);
}

#[test]
fn rearming_replaces_the_timer_instead_of_stacking() {
    let mut c = CarouselState::new(5);
    c.start_auto(PERIOD);
    c.start_auto(PERIOD);
    assert_eq!(c.tick(PERIOD), 1, "double start must not double the rate");
    assert_eq!(c.index(), 1);

    // Re-arming mid-period restarts the phase from zero.
    c.tick(PERIOD / 2);
    c.start_auto(PERIOD);
    assert_eq!(c.tick(PERIOD / 2), 0);
    assert_eq!(c.tick(PERIOD / 2), 1);
}

#[test]
fn set_index_clamps_against_the_end() {
    let mut c = CarouselState::new(4);
    c.set_index(2);
    assert_eq!(c.index(), 2);
    c.set_index(9);
    assert_eq!(c.index(), 3, "clamped, not wrapped");
}

#[test]
fn settled_index_rounds_to_the_nearest_slide() {
    let h = 640.0;
    assert_eq!(settled_index(0.0, h, 4), Some(0));
    assert_eq!(settled_index(2.4 * h, h, 4), Some(2));
    assert_eq!(settled_index(2.6 * h, h, 4), Some(3));
    assert_eq!(settled_index(9.0 * h, h, 4), Some(3), "clamped to the last slide");
    assert_eq!(settled_index(-0.7 * h, h, 4), Some(0), "clamped to the first");
    assert_eq!(settled_index(100.0, 0.0, 4), None, "degenerate viewport");
    assert_eq!(settled_index(100.0, h, 0), None, "no slides");
}

#[test]
fn scroll_settle_reports_once_after_the_quiet_window() {
    let quiet = Duration::from_millis(100);
    let mut s = ScrollSettle::new(quiet);
    assert_eq!(s.tick(quiet), None, "nothing pending before any scroll");

    assert!(s.scrolled(), "the first manual event suspends auto-advance");
    assert!(s.pending());
    assert_eq!(s.tick(Duration::from_millis(60)), None);
    assert!(!s.scrolled(), "the same burst suspends only once");
    assert_eq!(s.tick(Duration::from_millis(60)), None, "countdown restarted");
    assert_eq!(
        s.tick(Duration::from_millis(40)),
        Some(Settled { resume_auto: true }),
        "100 ms of quiet elapsed"
    );
    assert!(!s.pending());
    assert_eq!(s.tick(quiet), None, "reports exactly once per burst");
}

#[test]
fn programmatic_burst_settles_without_resuming_auto() {
    let quiet = Duration::from_millis(100);
    let mut s = ScrollSettle::new(quiet);
    s.mark_programmatic();
    assert!(s.pending(), "the mark itself arms the countdown");
    assert!(!s.scrolled(), "events it emits are not a manual gesture");
    assert!(!s.scrolled());
    assert_eq!(s.tick(quiet), Some(Settled { resume_auto: false }));
}

#[test]
fn silent_programmatic_mark_decays_at_settle() {
    // A scroll the browser clamps can emit no events at all; the countdown
    // armed by the mark still clears it, so the next burst reads as manual.
    let quiet = Duration::from_millis(100);
    let mut s = ScrollSettle::new(quiet);
    s.mark_programmatic();
    assert_eq!(s.tick(quiet), Some(Settled { resume_auto: false }));
    assert!(s.scrolled(), "next burst is a manual gesture again");
}

#[test]
fn mixed_burst_still_resumes_auto_advance() {
    // A manual gesture suspends auto-advance. A programmatic scroll joining
    // the same burst, an arrow click or a resize re-alignment inside the
    // quiet window, must not leave the suspension in place forever.
    let quiet = Duration::from_millis(100);
    let mut s = ScrollSettle::new(quiet);
    assert!(s.scrolled());
    assert_eq!(s.tick(Duration::from_millis(50)), None);
    s.mark_programmatic();
    assert!(!s.scrolled());
    assert_eq!(s.tick(Duration::from_millis(60)), None);
    assert_eq!(s.tick(quiet), Some(Settled { resume_auto: true }));
    assert!(s.scrolled(), "suspension cleared along with the settle");
}

#[test]
fn manual_then_arrow_click_keeps_the_carousel_cycling() {
    // Drive both machines the way the vertical slider does: suspend on a
    // manual scroll, navigate mid-burst, re-arm when the settle says so.
    let mut c = CarouselState::new(4);
    let mut s = ScrollSettle::new(Duration::from_millis(100));
    c.start_auto(PERIOD);

    if s.scrolled() {
        c.stop_auto();
    }
    assert!(!c.auto_running());

    c.next(); // arrow click inside the quiet window
    s.mark_programmatic();
    assert!(!s.scrolled());

    let outcome = s.tick(Duration::from_millis(100)).expect("quiet window elapsed");
    if outcome.resume_auto {
        c.start_auto(PERIOD);
    }
    assert!(c.auto_running(), "mixed burst must not leave auto-advance parked");
    assert_eq!(c.tick(PERIOD), 1, "cycling continues");
}
