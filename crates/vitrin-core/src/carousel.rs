//! Carousel state machine shared by the horizontal and vertical sliders.
//!
//! The machine knows nothing about pixels or transitions. It tracks an index
//! over a fixed slide count, wraps navigation requests, and runs an optional
//! auto-advance timer that the owner drives with `tick(dt)`.

use std::time::Duration;

/// Repeating auto-advance timer. Held as `Option<AutoAdvance>` on the state,
/// so arming replaces any previous timer and cancelling is a single `take`;
/// at most one timer ever exists per carousel.
#[derive(Clone, Copy, Debug)]
struct AutoAdvance {
    period: Duration,
    elapsed: Duration,
}

#[derive(Debug)]
pub struct CarouselState {
    count: usize,
    index: usize,
    auto: Option<AutoAdvance>,
}

impl CarouselState {
    pub fn new(count: usize) -> Self {
        Self { count, index: 0, auto: None }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Navigate to `target`, wrapping with Euclidean modulo so any integer,
    /// negatives included, lands in `[0, count)`. Returns the normalized
    /// index for the owner to reflect visually, or `None` when the carousel
    /// is empty and nothing happened.
    pub fn go_to(&mut self, target: i64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        self.index = target.rem_euclid(self.count as i64) as usize;
        Some(self.index)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.go_to(self.index as i64 + 1)
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.go_to(self.index as i64 - 1)
    }

    /// Direct assignment used when adopting a physical scroll position.
    /// Unlike `go_to` this clamps instead of wrapping: an offset past the
    /// last slide stays on the last slide.
    pub fn set_index(&mut self, index: usize) {
        if self.count == 0 {
            return;
        }
        self.index = index.min(self.count - 1);
    }

    /// Arm the auto-advance timer. A running timer is replaced and its phase
    /// restarts from zero.
    pub fn start_auto(&mut self, period: Duration) {
        log::debug!("auto-advance armed ({period:?})");
        self.auto = Some(AutoAdvance { period, elapsed: Duration::ZERO });
    }

    /// Cancel the auto-advance timer. Safe to call when none is armed.
    pub fn stop_auto(&mut self) {
        if self.auto.take().is_some() {
            log::debug!("auto-advance stopped");
        }
    }

    pub fn auto_running(&self) -> bool {
        self.auto.is_some()
    }

    /// Advance simulated time. Fires one `next()` per full period elapsed,
    /// so an oversized `dt` catches up rather than skipping beats. Returns
    /// the number of advances applied; the owner reflects the final index
    /// once when it is non-zero.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        let steps = match self.auto.as_mut() {
            Some(auto) if !auto.period.is_zero() => {
                auto.elapsed += dt;
                let mut fired = 0u32;
                while auto.elapsed >= auto.period {
                    auto.elapsed -= auto.period;
                    fired += 1;
                }
                fired
            }
            _ => 0,
        };
        if steps == 0 || self.count == 0 {
            return 0;
        }
        for _ in 0..steps {
            self.next();
        }
        steps
    }
}

/// Settle tracker for a scrollable viewport. Debounces a burst of scroll
/// events with a quiet-window countdown, tells manual events apart from
/// ones the owner's own scrolling produced, and remembers whether a manual
/// gesture suspended auto-advance so the settle can say when to lift it.
#[derive(Debug)]
pub struct ScrollSettle {
    quiet: Duration,
    pending: Option<Duration>,
    programmatic: bool,
    suspended: bool,
}

/// End-of-burst report from [`ScrollSettle::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settled {
    /// A manual gesture suspended auto-advance during this burst; the owner
    /// should re-arm it now.
    pub resume_auto: bool,
}

impl ScrollSettle {
    pub fn new(quiet: Duration) -> Self {
        Self { quiet, pending: None, programmatic: false, suspended: false }
    }

    /// The owner is about to issue its own scroll; events that follow are
    /// not a manual gesture. The countdown arms here as well, so the mark
    /// decays through the normal settle path even when the browser clamps
    /// the scroll and emits no events at all.
    pub fn mark_programmatic(&mut self) {
        self.programmatic = true;
        self.pending = Some(self.quiet);
    }

    /// Record a scroll event, restarting the quiet window. Returns true when
    /// the owner should suspend auto-advance: the event opens a manual
    /// gesture and no suspension is in force yet.
    pub fn scrolled(&mut self) -> bool {
        self.pending = Some(self.quiet);
        if self.programmatic || self.suspended {
            return false;
        }
        self.suspended = true;
        true
    }

    pub fn pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Advance time. Reports at most once per burst, when the quiet window
    /// fully elapses; the burst bookkeeping resets with it. `resume_auto`
    /// follows the suspension actually taken, not how the burst ended, so a
    /// programmatic scroll joining a manual burst cannot swallow the resume.
    pub fn tick(&mut self, dt: Duration) -> Option<Settled> {
        let left = self.pending.as_mut()?;
        match left.checked_sub(dt) {
            Some(rest) if !rest.is_zero() => {
                *left = rest;
                None
            }
            _ => {
                self.pending = None;
                let resume_auto = self.suspended;
                self.suspended = false;
                self.programmatic = false;
                Some(Settled { resume_auto })
            }
        }
    }
}

/// Index implied by a physical scroll offset: the nearest slide boundary,
/// clamped to the valid range. Settling clamps rather than wraps because a
/// real viewport cannot be scrolled past its ends.
pub fn settled_index(offset: f64, viewport: f64, count: usize) -> Option<usize> {
    if count == 0 || viewport <= 0.0 {
        return None;
    }
    let nearest = (offset / viewport).round();
    Some(nearest.clamp(0.0, (count - 1) as f64) as usize)
}
