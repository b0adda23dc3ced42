//! Simulated contact-form submission feedback.
//!
//! Nothing is transmitted anywhere. Submitting walks the button through a
//! fake latency phase and a confirmation hold, then restores the idle form.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Sending,
    Sent,
}

/// Observable transitions, emitted by `tick` in the order they elapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormTransition {
    /// Fake latency elapsed: show the confirmation.
    Sent,
    /// Confirmation hold elapsed: restore the idle form.
    Restored,
}

#[derive(Debug)]
pub struct FormFeedback {
    latency: Duration,
    hold: Duration,
    phase: FormPhase,
    remaining: Duration,
}

impl FormFeedback {
    pub fn new(latency: Duration, hold: Duration) -> Self {
        Self { latency, hold, phase: FormPhase::Idle, remaining: Duration::ZERO }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Begin the feedback sequence. Returns false, and changes nothing, while
    /// a previous submission is still animating; accepting it would capture
    /// the transient button label as the one to restore.
    pub fn submit(&mut self) -> bool {
        if self.phase != FormPhase::Idle {
            return false;
        }
        self.phase = FormPhase::Sending;
        self.remaining = self.latency;
        true
    }

    /// Advance time, pushing every transition that elapsed. An oversized
    /// `dt` can traverse both phases in a single call.
    pub fn tick(&mut self, dt: Duration, out: &mut Vec<FormTransition>) {
        let mut dt = dt;
        while self.phase != FormPhase::Idle {
            match self.remaining.checked_sub(dt) {
                Some(rest) if !rest.is_zero() => {
                    self.remaining = rest;
                    return;
                }
                _ => {
                    dt = dt.saturating_sub(self.remaining);
                    if self.phase == FormPhase::Sending {
                        self.phase = FormPhase::Sent;
                        self.remaining = self.hold;
                        out.push(FormTransition::Sent);
                    } else {
                        self.phase = FormPhase::Idle;
                        self.remaining = Duration::ZERO;
                        out.push(FormTransition::Restored);
                    }
                }
            }
        }
    }
}
