// SPDX-License-Identifier: MPL-2.0
//! Long-press recognition for the compact card variant.
//!
//! A press arms a timer; if the pointer stays down for the hold duration
//! the detector fires once and the press is consumed. Release cancels a
//! pending press and is always safe to call. The app's periodic tick
//! drives [`PressHold::fire_if_elapsed`], so the timer lives exactly as
//! long as the tick subscription it gates.

use std::time::{Duration, Instant};

/// Default hold duration before a press opens the detail modal.
pub const DEFAULT_HOLD: Duration = Duration::from_millis(2000);

/// Distinguishes a tap from a sustained press.
///
/// At most one timer is pending per instance; a new press replaces any
/// pending one. Firing consumes the press, so a hold produces exactly one
/// trigger and a later release cannot undo it.
#[derive(Debug, Clone)]
pub struct PressHold {
    hold: Duration,
    pressed_at: Option<Instant>,
}

impl Default for PressHold {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD)
    }
}

impl PressHold {
    /// Creates a detector with the given hold duration.
    #[must_use]
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            pressed_at: None,
        }
    }

    /// Arms (or re-arms) the timer at `now`.
    pub fn press(&mut self, now: Instant) {
        self.pressed_at = Some(now);
    }

    /// Cancels any pending press. Idempotent.
    pub fn release(&mut self) {
        self.pressed_at = None;
    }

    /// Fires once the press has been held long enough, consuming it.
    ///
    /// Returns `true` at most once per press.
    pub fn fire_if_elapsed(&mut self, now: Instant) -> bool {
        match self.pressed_at {
            Some(at) if now.duration_since(at) >= self.hold => {
                self.pressed_at = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a press is waiting on the timer.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// The configured hold duration.
    #[must_use]
    pub fn hold(&self) -> Duration {
        self.hold
    }
}
